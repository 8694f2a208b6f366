//! Header bar
//!
//! App title, workflow phase and the current document's vitals.

use lexguard_app::document::DocumentContext;
use lexguard_core::AnalysisPhase;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

use super::spinner;

/// Main header showing app title, phase and document info
pub struct MainHeader<'a> {
    phase: AnalysisPhase,
    document: Option<&'a DocumentContext>,
    frame: u64,
}

impl<'a> MainHeader<'a> {
    pub fn new(phase: AnalysisPhase) -> Self {
        Self {
            phase,
            document: None,
            frame: 0,
        }
    }

    pub fn document(mut self, document: Option<&'a DocumentContext>) -> Self {
        self.document = document;
        self
    }

    /// Spinner frame used while analyzing
    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }

    fn phase_span(&self) -> Span<'static> {
        let (icon, label, style) = styles::phase_indicator(self.phase);
        let icon = if self.phase == AnalysisPhase::Loading {
            spinner(self.frame)
        } else {
            icon
        };
        Span::styled(format!("{icon} {label}"), style)
    }

    fn document_spans(&self) -> Vec<Span<'static>> {
        let Some(doc) = self.document else {
            return Vec::new();
        };
        let sep = || Span::styled(" · ", styles::text_muted());
        let mut spans = vec![
            Span::styled(doc.name.clone(), styles::text_primary()),
            sep(),
            Span::styled(
                format!("{} chars", doc.editor.char_count()),
                styles::text_secondary(),
            ),
            sep(),
            Span::styled(
                format!("{} risks", doc.risks_found()),
                styles::text_secondary(),
            ),
        ];
        if doc.is_dirty() {
            spans.push(sep());
            spans.push(Span::styled("● unsaved", styles::keybinding()));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut left = vec![
            Span::styled(" ⚖ LexGuard", styles::accent_bold()),
            Span::styled("  ", Style::default()),
            self.phase_span(),
        ];
        let right = self.document_spans();
        if !right.is_empty() {
            left.push(Span::styled("  │  ", styles::text_muted()));
            left.extend(right);
        }
        Line::from(left).render(inner, buf);
    }
}
