//! Status line
//!
//! Shows the active notice, or keybinding hints for the current screen.

use lexguard_app::state::{AppState, Focus, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Status line widget
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::Library => &[("↑↓", "select"), ("Enter", "open"), ("Esc", "close")],
            UiMode::ConfirmDialog => &[("y", "confirm"), ("n", "cancel")],
            UiMode::Normal if !self.state.shows_analysis() => &[
                ("Tab", "mode"),
                ("Ctrl+O", "library"),
                ("Ctrl+Q", "quit"),
            ],
            UiMode::Normal => match self.state.focus {
                Focus::Editor => &[
                    ("Tab", "results"),
                    ("Ctrl+S", "save"),
                    ("Ctrl+E", "export"),
                    ("Ctrl+N", "new"),
                    ("Ctrl+O", "library"),
                    ("Ctrl+Q", "quit"),
                ],
                Focus::Results => &[
                    ("1-3", "tabs"),
                    ("↑↓", "risks"),
                    ("Enter", "expand"),
                    ("Tab", "editor"),
                    ("Ctrl+S", "save"),
                    ("q", "quit"),
                ],
            },
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = match &self.state.notice {
            Some(notice) => Line::from(Span::styled(
                format!(" {}", notice.text),
                styles::notice(notice.kind),
            )),
            None => {
                let mut spans = vec![Span::raw(" ")];
                for (i, (key, label)) in self.hints().iter().enumerate() {
                    if i > 0 {
                        spans.push(Span::styled("  ", styles::text_muted()));
                    }
                    spans.push(Span::styled(*key, styles::keybinding()));
                    spans.push(Span::styled(format!(" {label}"), styles::text_muted()));
                }
                if self.state.saving {
                    spans.push(Span::styled("  Saving...", styles::accent()));
                }
                Line::from(spans)
            }
        };
        line.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ready_state, TestTerminal};
    use lexguard_app::state::NoticeKind;

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_input_hints() {
        let term = render(&AppState::new());
        assert!(term.buffer_contains("Tab mode"));
        assert!(term.buffer_contains("Ctrl+O library"));
    }

    #[test]
    fn test_analysis_hints_follow_focus() {
        let mut state = ready_state("Lease agreement text", vec![]);
        assert!(render(&state).buffer_contains("Ctrl+S save"));

        state.focus = Focus::Results;
        assert!(render(&state).buffer_contains("Enter expand"));
    }

    #[test]
    fn test_notice_replaces_hints() {
        let mut state = AppState::new();
        state.show_notice(NoticeKind::Success, "Document saved successfully!");
        let term = render(&state);

        assert!(term.buffer_contains("Document saved successfully!"));
        assert!(!term.buffer_contains("Ctrl+O"));
    }

    #[test]
    fn test_saving_indicator() {
        let mut state = ready_state("Lease agreement text", vec![]);
        state.saving = true;
        assert!(render(&state).buffer_contains("Saving..."));
    }
}
