//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for each screen and overlay
//! - `analysis`: Submission, load-by-id and analysis replies
//! - `persistence`: Save, export and document library

pub(crate) mod analysis;
pub(crate) mod keys;
pub(crate) mod persistence;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use lexguard_core::{DocumentId, FileUpload};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Upload a validated file for analysis
    AnalyzeDocument { generation: u64, upload: FileUpload },

    /// Submit validated text for analysis
    AnalyzeText { generation: u64, text: String },

    /// Fetch a stored document by id
    LoadDocument { generation: u64, id: DocumentId },

    /// Persist the edited text
    SaveDocument {
        generation: u64,
        id: DocumentId,
        text: String,
    },

    /// Write `edited-document.txt` into `directory`
    ExportDocument { directory: PathBuf, text: String },

    /// Fetch the document library
    ListDocuments,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
