//! Confirmation dialog widget

use lexguard_app::confirm_dialog::ConfirmDialogState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use crate::theme::styles;

use super::modal_overlay::{centered_rect, dim_background};

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(50, 7, area);
        Clear.render(modal, buf);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);
        if inner.height < 2 {
            return;
        }

        let [message_area, _, options_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::text_primary())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        // First option confirms (y), the rest cancel (n)
        let mut spans = Vec::new();
        for (i, (label, _)) in self.state.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            let key = if i == 0 { "y" } else { "n" };
            spans.push(Span::styled(format!("[{key}]"), styles::keybinding()));
            spans.push(Span::styled(format!(" {label}"), styles::text_primary()));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(options_area, buf);
    }
}
