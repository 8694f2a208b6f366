//! Analysis service trait
//!
//! The workflow controller only talks to the remote service through this
//! trait. The TUI and headless runners use [`crate::HttpAnalysisClient`];
//! tests use the in-memory mock from `test_utils`.

use lexguard_core::prelude::*;
use lexguard_core::{AnalysisResult, DocumentId, DocumentRecord, DocumentSummary, FileUpload};

/// Remote analysis operations
///
/// Every method is a single request. Failures carry a message that can be
/// shown to the user as-is (see [`Error::user_message`]).
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Upload a validated file for analysis
    async fn analyze_document(&self, upload: FileUpload) -> Result<AnalysisResult>;

    /// Submit pasted text for analysis
    async fn analyze_text(&self, text: String) -> Result<AnalysisResult>;

    /// List previously analyzed documents
    async fn list_documents(&self) -> Result<Vec<DocumentSummary>>;

    /// Fetch a stored document by id
    async fn get_document(&self, id: DocumentId) -> Result<DocumentRecord>;

    /// Replace the stored edited text (idempotent)
    async fn update_document(&self, id: DocumentId, edited_text: String)
        -> Result<DocumentRecord>;
}
