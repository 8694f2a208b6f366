//! Display-width aware line wrapping

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// Wrap `text` at word boundaries to `width` columns.
///
/// Existing newlines are kept. Words longer than `width` are split.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split(' ') {
            let word_width: usize = word.chars().map(char_width).sum();
            let sep = usize::from(!line.is_empty());

            if line_width + sep + word_width <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            // Hard-split words wider than a whole line
            for c in word.chars() {
                let w = char_width(c);
                if line_width + w > width && !line.is_empty() {
                    out.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
        }
        out.push(line);
    }
    out
}

/// Split `text` into visual rows of at most `width` columns.
///
/// Each row is a range of char indices into `text`, excluding the newline
/// that ends it. There is always at least one row.
pub fn wrap_rows(text: &str, width: usize) -> Vec<Range<usize>> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut start = 0;
    let mut row_width = 0;

    for (idx, c) in text.chars().enumerate() {
        if c == '\n' {
            rows.push(start..idx);
            start = idx + 1;
            row_width = 0;
            continue;
        }
        let w = char_width(c);
        if row_width + w > width && idx > start {
            rows.push(start..idx);
            start = idx;
            row_width = 0;
        }
        row_width += w;
    }
    rows.push(start..text.chars().count());
    rows
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}
