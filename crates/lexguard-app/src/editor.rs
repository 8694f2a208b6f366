//! Multi-line text buffer with a character cursor
//!
//! Used for the pasted-text input, the file path input (single-line) and
//! the document editor. The cursor is a character index, never a byte
//! index, so multi-byte text edits cleanly.

use crate::message::TextEdit;

/// Lines moved by PageUp/PageDown
pub const PAGE_LINES: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    text: String,
    /// Character offset of the cursor
    cursor: usize,
    /// Text as last persisted; `None` means nothing to compare against
    last_saved: Option<String>,
    single_line: bool,
    /// First visible line, maintained by the renderer
    pub scroll: usize,
}

impl EditorState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = normalize_line_endings(&text.into());
        let cursor = 0;
        Self {
            text,
            cursor,
            last_saved: None,
            single_line: false,
            scroll: 0,
        }
    }

    /// A buffer that tracks unsaved changes against `saved`
    pub fn with_saved(text: impl Into<String>, saved: impl Into<String>) -> Self {
        let mut editor = Self::new(text);
        editor.last_saved = Some(normalize_line_endings(&saved.into()));
        editor
    }

    /// A buffer that never contains newlines
    pub fn single_line() -> Self {
        Self {
            single_line: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.last_saved
            .as_deref()
            .is_some_and(|saved| saved != self.text)
    }

    /// Record `persisted` as the saved state. Edits made after the save
    /// request was sent keep the buffer dirty.
    pub fn mark_saved(&mut self, persisted: &str) {
        self.last_saved = Some(persisted.to_string());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = self.sanitize(text);
        self.cursor = self.char_count();
    }

    /// Apply an edit; `Newline` is ignored in single-line buffers.
    pub fn apply(&mut self, edit: TextEdit) {
        match edit {
            TextEdit::Insert(c) => self.insert(c),
            TextEdit::InsertStr(s) => self.insert_str(&s),
            TextEdit::Newline => {
                if !self.single_line {
                    self.insert('\n');
                }
            }
            TextEdit::Backspace => self.backspace(),
            TextEdit::Delete => self.delete(),
            TextEdit::Left => self.cursor = self.cursor.saturating_sub(1),
            TextEdit::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            TextEdit::Up => self.move_lines_up(1),
            TextEdit::Down => self.move_lines_down(1),
            TextEdit::Home => {
                let (line, _) = self.cursor_line_col();
                self.cursor = self.line_start(line);
            }
            TextEdit::End => {
                let (line, _) = self.cursor_line_col();
                self.cursor = self.line_start(line) + self.line_len(line);
            }
            TextEdit::PageUp => self.move_lines_up(PAGE_LINES),
            TextEdit::PageDown => self.move_lines_down(PAGE_LINES),
        }
    }

    pub fn insert(&mut self, c: char) {
        if c == '\r' || (self.single_line && c == '\n') {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let s = self.sanitize(s);
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &s);
        self.cursor += s.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Zero-based (line, column) of the cursor, in characters
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    fn line_start(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .take(line)
            .map(|l| l.chars().count() + 1)
            .sum()
    }

    fn line_len(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .nth(line)
            .map(|l| l.chars().count())
            .unwrap_or(0)
    }

    fn move_lines_up(&mut self, n: usize) {
        let (line, col) = self.cursor_line_col();
        if line == 0 {
            self.cursor = 0;
            return;
        }
        let target = line.saturating_sub(n);
        self.cursor = self.line_start(target) + col.min(self.line_len(target));
    }

    fn move_lines_down(&mut self, n: usize) {
        let (line, col) = self.cursor_line_col();
        let last = self.line_count() - 1;
        if line >= last {
            self.cursor = self.char_count();
            return;
        }
        let target = (line + n).min(last);
        self.cursor = self.line_start(target) + col.min(self.line_len(target));
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn sanitize(&self, s: &str) -> String {
        let s = normalize_line_endings(s);
        if self.single_line {
            s.replace('\n', " ").trim().to_string()
        } else {
            s
        }
    }
}

/// Rewrite CRLF and lone CR line endings to LF
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
