//! Test utilities for the analysis client
//!
//! [`MockAnalysisService`] is an in-memory [`AnalysisService`] that records
//! every call and replays scripted replies. Clones share the same script and
//! call log, so a test can keep a handle while the engine owns another.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lexguard_core::prelude::*;
use lexguard_core::{
    AnalysisResult, DocumentId, DocumentRecord, DocumentSummary, FileUpload, MediaType, Risk,
    Severity,
};

use crate::service::AnalysisService;

/// A recorded call against the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AnalyzeDocument {
        file_name: String,
        media_type: MediaType,
        bytes: Vec<u8>,
    },
    AnalyzeText(String),
    ListDocuments,
    GetDocument(DocumentId),
    UpdateDocument(DocumentId, String),
}

#[derive(Default)]
struct Script {
    analyses: VecDeque<Result<AnalysisResult>>,
    lists: VecDeque<Result<Vec<DocumentSummary>>>,
    documents: VecDeque<Result<DocumentRecord>>,
    updates: VecDeque<Result<DocumentRecord>>,
}

/// In-memory analysis service
///
/// Unscripted calls succeed with fixture data, except `get_document`,
/// which answers 404.
#[derive(Clone, Default)]
pub struct MockAnalysisService {
    script: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<Call>>>,
    delay: Option<Duration>,
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every reply, to keep requests in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue the reply for the next `analyze_document` or `analyze_text` call
    pub fn push_analysis(&self, reply: Result<AnalysisResult>) -> &Self {
        self.lock_script().analyses.push_back(reply);
        self
    }

    pub fn push_list(&self, reply: Result<Vec<DocumentSummary>>) -> &Self {
        self.lock_script().lists.push_back(reply);
        self
    }

    pub fn push_document(&self, reply: Result<DocumentRecord>) -> &Self {
        self.lock_script().documents.push_back(reply);
        self
    }

    pub fn push_update(&self, reply: Result<DocumentRecord>) -> &Self {
        self.lock_script().updates.push_back(reply);
        self
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    pub fn update_calls(&self) -> Vec<(DocumentId, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::UpdateDocument(id, text) => Some((id, text)),
                _ => None,
            })
            .collect()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl AnalysisService for MockAnalysisService {
    async fn analyze_document(&self, upload: FileUpload) -> Result<AnalysisResult> {
        let text = String::from_utf8_lossy(&upload.bytes).into_owned();
        let name = upload.file_name.clone();
        self.record(Call::AnalyzeDocument {
            file_name: upload.file_name,
            media_type: upload.media_type,
            bytes: upload.bytes,
        });
        let reply = self.lock_script().analyses.pop_front();
        self.pause().await;
        reply.unwrap_or_else(|| {
            let mut result = sample_result(1, &text, vec![]);
            result.document_name = Some(name);
            Ok(result)
        })
    }

    async fn analyze_text(&self, text: String) -> Result<AnalysisResult> {
        self.record(Call::AnalyzeText(text.clone()));
        let reply = self.lock_script().analyses.pop_front();
        self.pause().await;
        reply.unwrap_or_else(|| Ok(sample_result(1, &text, vec![])))
    }

    async fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        self.record(Call::ListDocuments);
        let reply = self.lock_script().lists.pop_front();
        self.pause().await;
        reply.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_document(&self, id: DocumentId) -> Result<DocumentRecord> {
        self.record(Call::GetDocument(id));
        let reply = self.lock_script().documents.pop_front();
        self.pause().await;
        reply.unwrap_or_else(|| Err(Error::remote(Some(404), "Document not found")))
    }

    async fn update_document(&self, id: DocumentId, edited_text: String) -> Result<DocumentRecord> {
        self.record(Call::UpdateDocument(id, edited_text.clone()));
        let reply = self.lock_script().updates.pop_front();
        self.pause().await;
        reply.unwrap_or_else(|| {
            Ok(DocumentRecord {
                id: Some(id),
                edited_text: Some(edited_text),
                ..Default::default()
            })
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

/// Creates a risk with the given id and severity and filler text.
pub fn sample_risk(id: &str, severity: Severity) -> Risk {
    Risk {
        id: id.to_string(),
        clause: format!("Clause {id}: the tenant waives all rights."),
        risk_type: "Unfair Terms".to_string(),
        severity,
        explanation: "One-sided waiver of statutory rights.".to_string(),
        original_text: format!("Clause {id}: the tenant waives all rights."),
        suggested_rewrite: Some("Both parties retain their statutory rights.".to_string()),
        start_position: None,
        end_position: None,
    }
}

/// Creates an analysis result for document `id` with `text` and `risks`.
pub fn sample_result(id: u64, text: &str, risks: Vec<Risk>) -> AnalysisResult {
    AnalysisResult {
        document_id: Some(DocumentId(id)),
        text: text.to_string(),
        summary: Some("A residential lease with several one-sided clauses.".to_string()),
        risks_found: Some(risks.len()),
        risks,
        document_name: Some("Text Input".to_string()),
        text_length: Some(text.chars().count()),
        analysis_id: None,
    }
}

/// Creates a stored document record.
pub fn sample_record(id: u64, original: &str, edited: Option<&str>) -> DocumentRecord {
    DocumentRecord {
        id: Some(DocumentId(id)),
        original_text: original.to_string(),
        edited_text: edited.map(String::from),
        summary: Some("Stored summary".to_string()),
        risks: vec![sample_risk("r1", Severity::Medium)],
        document_name: Some("lease.pdf".to_string()),
    }
}
