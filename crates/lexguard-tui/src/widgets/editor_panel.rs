//! Editable document panel
//!
//! Soft-wraps the edited text, keeps the cursor (or the highlighted clause)
//! in view and marks unsaved edits in the title.

use std::ops::Range;

use lexguard_app::editor::EditorState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};

use crate::theme::{palette, styles};

use super::wrap::{char_width, wrap_rows};

/// Document editor bound to an [`EditorState`]
pub struct EditorPanel {
    focused: bool,
    highlight: Option<Range<usize>>,
    show_char_count: bool,
}

impl EditorPanel {
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            highlight: None,
            show_char_count: true,
        }
    }

    /// Highlight a char range (the selected risk's clause)
    pub fn highlight(mut self, range: Option<Range<usize>>) -> Self {
        self.highlight = range;
        self
    }

    pub fn show_char_count(mut self, show: bool) -> Self {
        self.show_char_count = show;
        self
    }

    fn style_for(&self, idx: usize, cursor: usize) -> Style {
        if self.focused && idx == cursor {
            styles::cursor()
        } else if self.highlight.as_ref().is_some_and(|r| r.contains(&idx)) {
            styles::clause_highlight()
        } else {
            styles::text_primary()
        }
    }
}

impl StatefulWidget for EditorPanel {
    type State = EditorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut EditorState) {
        let title = if state.is_dirty() {
            " Document Editor ● unsaved "
        } else {
            " Document Editor "
        };
        let mut block = styles::glass_block(self.focused)
            .title(Span::styled(title, styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        if self.show_char_count {
            block = block.title_bottom(Span::styled(
                format!(" {} characters ", state.char_count()),
                styles::text_muted(),
            ));
        }

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let chars: Vec<char> = state.text().chars().collect();
        // Leave one column for a cursor sitting at the end of a full row
        let rows = wrap_rows(state.text(), inner.width.saturating_sub(1) as usize);
        let height = inner.height as usize;

        let anchor = match (&self.highlight, self.focused) {
            (Some(range), false) => range.start,
            _ => state.cursor(),
        };
        let anchor_row = rows
            .iter()
            .rposition(|r| r.start <= anchor)
            .unwrap_or_default();
        if anchor_row < state.scroll {
            state.scroll = anchor_row;
        } else if anchor_row >= state.scroll + height {
            state.scroll = anchor_row + 1 - height;
        }
        state.scroll = state.scroll.min(rows.len().saturating_sub(1));

        let cursor = state.cursor();
        for (offset, row) in rows.iter().skip(state.scroll).take(height).enumerate() {
            let mut spans: Vec<Span> = Vec::new();
            let mut run = String::new();
            let mut run_style = Style::default();

            for idx in row.clone() {
                let style = self.style_for(idx, cursor);
                if style != run_style && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                }
                run_style = style;
                run.push(chars[idx]);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, run_style));
            }

            // Cursor past the last char of the row (end of line or text)
            let row_width: usize = row.clone().map(|i| char_width(chars[i])).sum();
            let at_row_end = cursor == row.end
                && (chars.get(cursor) == Some(&'\n') || cursor == chars.len());
            if self.focused && at_row_end && row_width < inner.width as usize {
                spans.push(Span::styled(" ", styles::cursor()));
            }

            let y = inner.y + offset as u16;
            Line::from(spans).render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}
