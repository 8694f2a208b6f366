//! Results panel: Summary, Ask and Risky Clauses tabs

use lexguard_app::presenter::{RiskCard, RisksView, ResultsView, ASK_PLACEHOLDER, NO_RISKS_MESSAGE};
use lexguard_core::ResultTab;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{palette, styles};

use super::wrap::wrap_words;

/// Tabbed view of a [`ResultsView`]
pub struct ResultsPanel<'a> {
    view: &'a ResultsView,
    active_tab: ResultTab,
    focused: bool,
    /// Index of the risk card under the cursor
    cursor: usize,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(view: &'a ResultsView, active_tab: ResultTab) -> Self {
        Self {
            view,
            active_tab,
            focused: false,
            cursor: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    fn tab_bar(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, tab) in ResultTab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let label = match tab {
                ResultTab::Risks => format!("{} {} ({})", i + 1, tab.title(), self.view.risk_count),
                _ => format!("{} {}", i + 1, tab.title()),
            };
            let style = if *tab == self.active_tab {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {label} "), style));
        }
        Line::from(spans)
    }

    fn summary_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![heading("Document Summary"), Line::from("")];
        let summary_style = if self.view.summary_available {
            styles::text_primary()
        } else {
            styles::text_muted()
        };
        lines.extend(wrapped(&self.view.summary, width, summary_style));
        lines
    }

    /// Disclaimer shown under every tab, with a rule above it
    fn disclaimer_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            "─".repeat(width),
            styles::text_muted(),
        ))];
        lines.extend(wrapped(
            self.view.disclaimer,
            width,
            styles::text_muted().add_modifier(Modifier::ITALIC),
        ));
        lines
    }

    fn ask_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![heading("Ask Questions"), Line::from("")];
        lines.extend(wrapped(ASK_PLACEHOLDER, width, styles::text_muted()));
        lines
    }

    /// Lines for the risks tab and the line index where the cursor card starts
    fn risk_lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Risky Clauses Detected", styles::accent_bold()),
                Span::styled(
                    format!("  {} risks found", self.view.risk_count),
                    styles::text_secondary(),
                ),
            ]),
            Line::from(""),
        ];

        let cards = match &self.view.risks {
            RisksView::NoRisks => {
                lines.extend(wrapped(
                    NO_RISKS_MESSAGE,
                    width,
                    Style::default().fg(palette::STATUS_GREEN),
                ));
                return (lines, 0);
            }
            RisksView::Cards(cards) => cards,
        };

        let mut cursor_line = 0;
        for (i, card) in cards.iter().enumerate() {
            if i == self.cursor {
                cursor_line = lines.len();
            }
            lines.extend(self.card_lines(card, i == self.cursor, width));
            lines.push(Line::from(""));
        }
        (lines, cursor_line)
    }

    fn card_lines(&self, card: &RiskCard, under_cursor: bool, width: usize) -> Vec<Line<'static>> {
        let marker = if under_cursor && self.focused { "▶ " } else { "  " };
        let toggle = if card.expanded { "▾" } else { "▸" };
        let body_width = width.saturating_sub(4);

        let mut lines = vec![Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::styled(
                format!("[{}]", card.severity.as_str().to_uppercase()),
                styles::severity(card.class),
            ),
            Span::raw(" "),
            Span::styled(
                card.risk_type.clone(),
                styles::text_primary().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {toggle}"), styles::text_muted()),
        ])];

        let indent = |line: Line<'static>| {
            let mut spans = vec![Span::raw("    ")];
            spans.extend(line.spans);
            Line::from(spans)
        };

        lines.extend(
            wrapped(&format!("\"{}\"", card.preview), body_width, styles::text_secondary())
                .into_iter()
                .map(indent),
        );

        if card.expanded {
            lines.extend(
                wrapped(&card.explanation, body_width, styles::text_primary())
                    .into_iter()
                    .map(indent),
            );
            if let Some(rewrite) = &card.rewrite {
                lines.push(indent(Line::from(Span::styled(
                    "Suggested Alternative:",
                    Style::default()
                        .fg(palette::STATUS_GREEN)
                        .add_modifier(Modifier::BOLD),
                ))));
                lines.extend(
                    wrapped(rewrite, body_width, Style::default().fg(palette::STATUS_GREEN))
                        .into_iter()
                        .map(indent),
                );
            }
        }
        lines
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" Analysis Results ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // The footer is laid out first so it survives any panel height
        let width = inner.width as usize;
        let footer = self.disclaimer_lines(width);
        let footer_height = (footer.len() as u16).min(inner.height);
        let [body_area, footer_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(footer_height),
        ])
        .areas(inner);
        Paragraph::new(footer).render(footer_area, buf);

        if body_area.height < 3 {
            return;
        }
        let [tabs_area, _, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(body_area);

        self.tab_bar().render(tabs_area, buf);

        let (lines, anchor) = match self.active_tab {
            ResultTab::Summary => (self.summary_lines(width), 0),
            ResultTab::Ask => (self.ask_lines(width), 0),
            ResultTab::Risks => self.risk_lines(width),
        };

        // Keep the cursor card's first line in view
        let height = content_area.height as usize;
        let scroll = if anchor + 1 > height {
            (anchor + 1 - height).min(lines.len().saturating_sub(height))
        } else {
            0
        };

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .render(content_area, buf);
    }
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, styles::accent_bold()))
}

fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_words(text, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use lexguard_app::presenter::{present, DISCLAIMER};
    use lexguard_client::test_utils::sample_risk;
    use lexguard_core::Severity;

    fn shows_disclaimer(term: &TestTerminal) -> bool {
        term.buffer_contains(&DISCLAIMER[..40]) && term.buffer_contains("legal decisions.")
    }

    #[test]
    fn test_summary_tab_shows_summary_and_disclaimer() {
        let view = present(Some("A short lease."), &[], None);
        let mut term = TestTerminal::wide();
        term.render_widget(ResultsPanel::new(&view, ResultTab::Summary), term.area());

        assert!(term.buffer_contains("Document Summary"));
        assert!(term.buffer_contains("A short lease."));
        assert!(shows_disclaimer(&term));
    }

    #[test]
    fn test_disclaimer_on_every_tab() {
        let risks = vec![sample_risk("a", Severity::High)];
        let view = present(Some("Summary"), &risks, Some("a"));
        for tab in ResultTab::ALL {
            let mut term = TestTerminal::wide();
            term.render_widget(ResultsPanel::new(&view, tab).focused(true), term.area());
            assert!(shows_disclaimer(&term), "no disclaimer on {tab:?}");
        }
    }

    #[test]
    fn test_disclaimer_stays_below_long_content() {
        let summary = "The landlord may terminate at will. ".repeat(60);
        let risks: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| sample_risk(id, Severity::Medium))
            .collect();
        let view = present(Some(summary.as_str()), &risks, Some("e"));

        for tab in [ResultTab::Summary, ResultTab::Risks] {
            let mut term = TestTerminal::new();
            term.render_widget(
                ResultsPanel::new(&view, tab).focused(true).cursor(4),
                term.area(),
            );
            assert!(shows_disclaimer(&term), "no disclaimer on {tab:?}");

            // Footer sits on the last rows inside the border
            let (_, y) = term.find("decisions.").unwrap();
            assert_eq!(y, term.area().height - 2);
        }
    }

    #[test]
    fn test_tab_bar_shows_risk_count() {
        let risks = vec![sample_risk("a", Severity::Low), sample_risk("b", Severity::High)];
        let view = present(None, &risks, None);
        let mut term = TestTerminal::wide();
        term.render_widget(ResultsPanel::new(&view, ResultTab::Summary), term.area());

        assert!(term.buffer_contains("Risky Clauses (2)"));
        assert!(term.buffer_contains("No summary available"));
    }

    #[test]
    fn test_ask_tab_placeholder() {
        let view = present(None, &[], None);
        let mut term = TestTerminal::wide();
        term.render_widget(ResultsPanel::new(&view, ResultTab::Ask), term.area());
        assert!(term.buffer_contains(ASK_PLACEHOLDER));
    }

    #[test]
    fn test_risks_tab_no_risks() {
        let view = present(None, &[], None);
        let mut term = TestTerminal::wide();
        term.render_widget(ResultsPanel::new(&view, ResultTab::Risks), term.area());

        assert!(term.buffer_contains("0 risks found"));
        assert!(term.buffer_contains(NO_RISKS_MESSAGE));
    }

    #[test]
    fn test_risks_sorted_with_badges() {
        let risks = vec![sample_risk("a", Severity::Low), sample_risk("b", Severity::High)];
        let view = present(None, &risks, None);
        let mut term = TestTerminal::wide();
        term.render_widget(ResultsPanel::new(&view, ResultTab::Risks), term.area());

        let (_, high_y) = term.find("[HIGH]").unwrap();
        let (_, low_y) = term.find("[LOW]").unwrap();
        assert!(high_y < low_y);
        assert!(!term.buffer_contains("Suggested Alternative:"));
    }

    #[test]
    fn test_expanded_card_shows_rewrite() {
        let risks = vec![sample_risk("a", Severity::Medium)];
        let view = present(None, &risks, Some("a"));
        let mut term = TestTerminal::wide();
        term.render_widget(
            ResultsPanel::new(&view, ResultTab::Risks).focused(true),
            term.area(),
        );

        assert!(term.buffer_contains("Suggested Alternative:"));
        assert!(term.buffer_contains("Both parties retain their statutory rights."));
        assert!(term.buffer_contains("▶"));
    }

    #[test]
    fn test_unknown_severity_badge() {
        let risks = vec![sample_risk("u", Severity::Unknown)];
        let view = present(None, &risks, None);
        let mut term = TestTerminal::wide();
        term.render_widget(ResultsPanel::new(&view, ResultTab::Risks), term.area());
        assert!(term.buffer_contains("[UNKNOWN]"));
    }
}
