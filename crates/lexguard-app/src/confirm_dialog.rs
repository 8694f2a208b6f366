//! Confirm dialog state.
//!
//! Data model for confirmation dialogs. The rendering widget lives in
//! lexguard-tui's `widgets/confirm_dialog.rs`.

use crate::message::Message;

#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
        }
    }

    /// Quit confirmation shown when the edited text has not been saved
    pub fn unsaved_quit() -> Self {
        Self::new(
            "Quit LexGuard?",
            "You have unsaved edits. Quit without saving?",
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CancelQuit)],
        )
    }
}
