//! Custom widget components

mod confirm_dialog;
mod editor_panel;
mod header;
mod input_panel;
mod library;
pub mod modal_overlay;
mod results_panel;
mod status_bar;
pub mod wrap;

pub use confirm_dialog::ConfirmDialog;
pub use editor_panel::EditorPanel;
pub use header::MainHeader;
pub use input_panel::{InputPanel, PATH_HINT, TEXT_PLACEHOLDER};
pub use library::LibraryModal;
pub use results_panel::ResultsPanel;
pub use status_bar::StatusBar;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame
pub fn spinner(frame: u64) -> &'static str {
    SPINNER_FRAMES[(frame % SPINNER_FRAMES.len() as u64) as usize]
}
