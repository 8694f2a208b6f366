//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the analysis panels are stacked instead of side by side
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, document info and phase
    pub header: Rect,

    /// Input screen or analysis panels
    pub body: Rect,

    /// Notice and keybinding hints
    pub status: Rect,
}

/// Areas of the analysis screen
#[derive(Debug, Clone, Copy)]
pub struct AnalysisAreas {
    pub editor: Rect,
    pub results: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(5),    // Body
        Constraint::Length(1), // Status line
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Editor and results side by side, or stacked on narrow terminals
pub fn split_analysis(body: Rect) -> AnalysisAreas {
    let chunks = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(body)
    } else {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(body)
    };

    AnalysisAreas {
        editor: chunks[0],
        results: chunks[1],
    }
}
