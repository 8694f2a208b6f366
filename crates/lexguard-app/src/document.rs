//! The document currently under analysis
//!
//! A `DocumentContext` exists only while the workflow is `Ready`. It owns the
//! immutable original text and risks plus the editable working copy.
//! Both texts are held with LF line endings so an untouched copy always
//! equals the original.

use lexguard_core::prelude::*;
use lexguard_core::{assign_missing_ids, AnalysisResult, DocumentId, DocumentRecord, Risk};

use crate::editor::{normalize_line_endings, EditorState};

const TEXT_INPUT_NAME: &str = "Text Input";

#[derive(Debug, Clone)]
pub struct DocumentContext {
    /// Absent when the server did not return an id; saving is then disabled
    pub id: Option<DocumentId>,
    pub name: String,
    original_text: String,
    pub summary: Option<String>,
    risks: Vec<Risk>,
    /// Working copy, seeded once and never resynchronised from the original
    pub editor: EditorState,
}

impl DocumentContext {
    /// Build a context from an analysis reply.
    ///
    /// Falls back to `submitted_text` when the reply does not echo the text.
    pub fn from_analysis(
        result: AnalysisResult,
        submitted_text: Option<&str>,
        file_name: Option<&str>,
    ) -> Self {
        let original_text = if result.text.is_empty() {
            normalize_line_endings(submitted_text.unwrap_or_default())
        } else {
            normalize_line_endings(&result.text)
        };

        let mut risks = result.risks;
        assign_missing_ids(&mut risks);

        if let Some(reported) = result.risks_found {
            if reported != risks.len() {
                warn!(
                    "Server reported {} risks but sent {}; using the list",
                    reported,
                    risks.len()
                );
            }
        }

        let name = result
            .document_name
            .filter(|n| !n.trim().is_empty())
            .or_else(|| file_name.map(String::from))
            .unwrap_or_else(|| TEXT_INPUT_NAME.to_string());

        // The server stores the original as the first edited copy
        let editor = EditorState::with_saved(original_text.clone(), original_text.clone());

        Self {
            id: result.document_id,
            name,
            original_text,
            summary: result.summary,
            risks,
            editor,
        }
    }

    /// Build a context from a stored document fetched by `requested` id.
    pub fn from_record(record: DocumentRecord, requested: DocumentId) -> Self {
        let mut risks = record.risks;
        assign_missing_ids(&mut risks);

        let original_text = normalize_line_endings(&record.original_text);
        let edited = record
            .edited_text
            .map(|t| normalize_line_endings(&t))
            .unwrap_or_else(|| original_text.clone());
        let editor = EditorState::with_saved(edited.clone(), edited);

        let id = record.id.unwrap_or(requested);
        let name = record
            .document_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Document #{id}"));

        Self {
            id: Some(id),
            name,
            original_text,
            summary: record.summary,
            risks,
            editor,
        }
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn edited_text(&self) -> &str {
        self.editor.text()
    }

    pub fn risks(&self) -> &[Risk] {
        &self.risks
    }

    /// Always equal to `risks().len()`
    pub fn risks_found(&self) -> usize {
        self.risks.len()
    }

    pub fn has_risk(&self, id: &str) -> bool {
        self.risks.iter().any(|r| r.id == id)
    }

    pub fn text_length(&self) -> usize {
        self.original_text.chars().count()
    }

    pub fn is_dirty(&self) -> bool {
        self.editor.is_dirty()
    }
}
