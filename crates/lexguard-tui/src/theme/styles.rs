//! Semantic style builders

use lexguard_app::presenter::SeverityClass;
use lexguard_app::state::NoticeKind;
use lexguard_core::AnalysisPhase;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// Keybinding hint
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for focused+selected items across widgets
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn clause_highlight() -> Style {
    Style::default()
        .fg(palette::CLAUSE_HIGHLIGHT_FG)
        .bg(palette::CLAUSE_HIGHLIGHT_BG)
}

pub fn cursor() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::CURSOR_BG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Severity & phase mapping ---

/// Badge style for a risk severity class
pub fn severity(class: SeverityClass) -> Style {
    let color = match class {
        SeverityClass::Danger => palette::SEVERITY_HIGH,
        SeverityClass::Warning => palette::SEVERITY_MEDIUM,
        SeverityClass::Info => palette::SEVERITY_LOW,
        SeverityClass::Neutral => palette::SEVERITY_UNKNOWN,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn notice(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Info => Style::default().fg(palette::STATUS_BLUE),
        NoticeKind::Success => Style::default().fg(palette::STATUS_GREEN),
        NoticeKind::Error => Style::default()
            .fg(palette::STATUS_RED)
            .add_modifier(Modifier::BOLD),
    }
}

/// Phase indicator for the header.
///
/// Returns `(icon_char, label, Style)` for the given phase.
pub fn phase_indicator(phase: AnalysisPhase) -> (&'static str, &'static str, Style) {
    match phase {
        AnalysisPhase::Idle => ("○", "Ready for input", text_muted()),
        AnalysisPhase::Loading => (
            "↻",
            "Analyzing",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        AnalysisPhase::Ready => (
            "●",
            "Analysis ready",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        AnalysisPhase::Error => ("✗", "Error", status_red()),
    }
}
