//! Color palette

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Severity badges ---
pub const SEVERITY_HIGH: Color = Color::Red;
pub const SEVERITY_MEDIUM: Color = Color::Yellow;
pub const SEVERITY_LOW: Color = Color::Blue;
pub const SEVERITY_UNKNOWN: Color = Color::Gray;

// --- Editor ---
pub const CLAUSE_HIGHLIGHT_FG: Color = Color::Black;
pub const CLAUSE_HIGHLIGHT_BG: Color = Color::Yellow;
pub const CURSOR_BG: Color = Color::White;

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);
