//! Input screen: file path or pasted text, plus the submit control

use lexguard_app::editor::EditorState;
use lexguard_app::state::AppState;
use lexguard_core::{AnalysisPhase, InputMode};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme::{palette, styles};

use super::spinner;
use super::wrap::wrap_rows;

pub const PATH_HINT: &str = "Supports PDF, DOCX, and TXT files";
pub const TEXT_PLACEHOLDER: &str = "Paste your legal document text here...";

/// The whole input screen, drawn from [`AppState`]
pub struct InputPanel<'a> {
    state: &'a AppState,
}

impl<'a> InputPanel<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn loading(&self) -> bool {
        self.state.phase() == AnalysisPhase::Loading
    }

    fn mode_tabs(&self) -> Line<'static> {
        let active = self.state.workflow.mode();
        let mut spans = Vec::new();
        for mode in [InputMode::Upload, InputMode::Text] {
            let style = if mode == active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", mode.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("[Tab] switch", styles::text_muted()));
        Line::from(spans)
    }

    fn render_path_field(&self, area: Rect, buf: &mut Buffer) {
        let [field_area, hint_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let block = styles::glass_block(!self.loading())
            .title(Span::styled(" File path ", styles::text_secondary()));
        let inner = block.inner(field_area);
        block.render(field_area, buf);

        let input = &self.state.path_input;
        let line = if input.is_empty() && self.loading() {
            Line::from("")
        } else {
            cursor_line(input.text(), input.cursor(), !self.loading())
        };
        // Keep the tail of long paths visible
        let visible = inner.width.saturating_sub(1) as usize;
        let scroll = input.cursor().saturating_sub(visible);
        Paragraph::new(line)
            .scroll((0, scroll as u16))
            .render(inner, buf);

        Line::from(Span::styled(PATH_HINT, styles::text_muted())).render(hint_area, buf);
    }

    fn render_text_area(&self, area: Rect, buf: &mut Buffer) {
        let input = &self.state.text_input;
        let mut block = styles::glass_block(!self.loading())
            .title(Span::styled(" Document text ", styles::text_secondary()));
        if self.state.settings.ui.show_char_count {
            block = block.title_bottom(Span::styled(
                format!(" {} characters ", input.char_count()),
                styles::text_muted(),
            ));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if input.is_empty() {
            let mut spans = Vec::new();
            if !self.loading() {
                spans.push(Span::styled(" ", styles::cursor()));
            }
            spans.push(Span::styled(TEXT_PLACEHOLDER, styles::text_muted()));
            Line::from(spans).render(inner, buf);
            return;
        }

        render_wrapped(input, !self.loading(), inner, buf);
    }

    fn render_error(&self, area: Rect, buf: &mut Buffer) {
        if let Some(error) = self.state.visible_error() {
            Paragraph::new(Line::from(vec![
                Span::styled("✗ ", styles::status_red()),
                Span::styled(error.to_string(), styles::status_red()),
            ]))
            .wrap(Wrap { trim: true })
            .render(area, buf);
        }
    }

    fn submit_line(&self) -> Line<'static> {
        if self.loading() {
            return Line::from(Span::styled(
                format!(" {} Analyzing... ", spinner(self.state.animation_frame)),
                Style::default()
                    .fg(palette::STATUS_YELLOW)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        let (label, key) = match self.state.workflow.mode() {
            InputMode::Upload => ("Analyze Document", "[Enter]"),
            InputMode::Text => ("Analyze Text", "[F5]"),
        };
        Line::from(vec![
            Span::styled(format!(" {label} "), styles::focused_selected()),
            Span::raw(" "),
            Span::styled(key, styles::keybinding()),
        ])
    }
}

impl Widget for InputPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 4 || inner.height < 8 {
            return;
        }

        let [title_area, _, tabs_area, _, body_area, error_area, submit_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .areas(inner.inner(Margin::new(1, 0)));

        Line::from(Span::styled("Analyze Your Document", styles::accent_bold()))
            .render(title_area, buf);
        self.mode_tabs().render(tabs_area, buf);

        match self.state.workflow.mode() {
            InputMode::Upload => self.render_path_field(body_area, buf),
            InputMode::Text => self.render_text_area(body_area, buf),
        }

        self.render_error(error_area, buf);
        self.submit_line().render(submit_area, buf);
    }
}

/// One line of text with a block cursor at `cursor`
fn cursor_line(text: &str, cursor: usize, show_cursor: bool) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let before: String = chars[..cursor.min(chars.len())].iter().collect();
    let mut spans = vec![Span::styled(before, styles::text_primary())];
    if show_cursor {
        let at = chars
            .get(cursor)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        spans.push(Span::styled(at, styles::cursor()));
        let after: String = chars.iter().skip(cursor + 1).collect();
        spans.push(Span::styled(after, styles::text_primary()));
    } else {
        let after: String = chars.iter().skip(cursor).collect();
        spans.push(Span::styled(after, styles::text_primary()));
    }
    Line::from(spans)
}

/// Soft-wrapped multi-line input, scrolled so the cursor row is visible
fn render_wrapped(input: &EditorState, show_cursor: bool, area: Rect, buf: &mut Buffer) {
    let text = input.text();
    let chars: Vec<char> = text.chars().collect();
    let rows = wrap_rows(text, area.width.saturating_sub(1) as usize);
    let cursor = input.cursor();
    let height = area.height as usize;

    let cursor_row = rows
        .iter()
        .rposition(|r| r.start <= cursor)
        .unwrap_or_default();
    let scroll = (cursor_row + 1).saturating_sub(height);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(idx, row)| {
            let row_text: String = chars[row.clone()].iter().collect();
            if show_cursor && idx == cursor_row {
                cursor_line(&row_text, cursor - row.start, true)
            } else {
                Line::from(Span::styled(row_text, styles::text_primary()))
            }
        })
        .collect();
    Paragraph::new(lines).render(area, buf);
}
