//! Document library modal
//!
//! Lists previously analyzed documents; Enter loads the highlighted one.

use lexguard_app::state::LibraryState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{palette, styles};

use super::modal_overlay::{centered_rect, dim_background};

const MODAL_WIDTH: u16 = 72;
const MODAL_HEIGHT: u16 = 18;

pub struct LibraryModal<'a> {
    state: &'a LibraryState,
}

impl<'a> LibraryModal<'a> {
    pub fn new(state: &'a LibraryState) -> Self {
        Self { state }
    }

    fn rows(&self, width: usize, height: usize) -> Vec<Line<'static>> {
        if self.state.loading {
            return vec![Line::from(Span::styled("Loading...", styles::text_muted()))];
        }
        if self.state.documents.is_empty() {
            return vec![Line::from(Span::styled(
                "No saved documents yet",
                styles::text_muted(),
            ))];
        }

        // Window the list around the selection
        let start = (self.state.selected + 1).saturating_sub(height);
        self.state
            .documents
            .iter()
            .enumerate()
            .skip(start)
            .take(height)
            .map(|(i, doc)| {
                let selected = i == self.state.selected;
                let risks = doc
                    .risks_found
                    .map(|n| format!("{n} risks"))
                    .unwrap_or_default();
                let created = doc
                    .created_at
                    .as_deref()
                    .map(|c| c.chars().take(10).collect::<String>())
                    .unwrap_or_default();
                let name_width = width.saturating_sub(32).max(8);
                let mut name = doc.display_name();
                if name.chars().count() > name_width {
                    name = name.chars().take(name_width - 1).collect::<String>() + "…";
                }
                let text = format!(
                    "#{:<5} {:<nw$} {:>9}  {:>10}",
                    doc.id.0,
                    name,
                    risks,
                    created,
                    nw = name_width
                );
                let style = if selected {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(text, style))
            })
            .collect()
    }
}

impl Widget for LibraryModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);

        let block = styles::modal_block(" Document Library ");
        let inner = block.inner(modal);
        block.render(modal, buf);
        if inner.height < 3 {
            return;
        }

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(self.rows(list_area.width as usize, list_area.height as usize))
            .style(Style::default().bg(palette::POPUP_BG))
            .render(list_area, buf);

        Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" open  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" close", styles::text_muted()),
        ])
        .render(footer_area, buf);
    }
}
