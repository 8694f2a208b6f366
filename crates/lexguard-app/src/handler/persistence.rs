//! Save, export and document library handlers

use std::path::PathBuf;

use lexguard_core::prelude::*;
use lexguard_core::{DocumentId, DocumentSummary};

use crate::state::{AppState, NoticeKind, UiMode};

use super::{UpdateAction, UpdateResult};

pub const SAVE_SUCCESS_MESSAGE: &str = "Document saved successfully!";
pub const NO_DOCUMENT_TO_SAVE: &str = "No document to save";
pub const NO_DOCUMENT_TO_EXPORT: &str = "No document to export";

pub fn handle_save(state: &mut AppState) -> UpdateResult {
    if state.saving {
        debug!("Save already in flight");
        return UpdateResult::none();
    }
    let (id, text) = match state.workflow.document() {
        Some(doc) => (doc.id, doc.edited_text().to_string()),
        None => return UpdateResult::none(),
    };
    let Some(id) = id else {
        debug!("Save requested without a document id");
        state.show_notice(NoticeKind::Error, NO_DOCUMENT_TO_SAVE);
        return UpdateResult::none();
    };

    state.saving = true;
    UpdateResult::action(UpdateAction::SaveDocument {
        generation: state.workflow.generation(),
        id,
        text,
    })
}

pub fn handle_saved(
    state: &mut AppState,
    generation: u64,
    id: DocumentId,
    text: &str,
) -> UpdateResult {
    state.saving = false;

    let current = state.workflow.is_current(generation);
    let applied = match state.workflow.document_mut() {
        Some(doc) if current && doc.id == Some(id) => {
            doc.editor.mark_saved(text);
            true
        }
        _ => false,
    };

    if applied {
        info!("Saved document {}", id);
        state.show_notice(NoticeKind::Success, SAVE_SUCCESS_MESSAGE);
    } else {
        debug!("Document {} saved after the workflow moved on", id);
    }
    UpdateResult::none()
}

pub fn handle_save_failed(state: &mut AppState, generation: u64, message: String) -> UpdateResult {
    state.saving = false;

    if !state.workflow.is_current(generation) {
        debug!("Ignoring stale save failure: {}", message);
        return UpdateResult::none();
    }
    warn!("Save failed: {}", message);
    state.show_notice(NoticeKind::Error, message);
    UpdateResult::none()
}

pub fn handle_export(state: &mut AppState) -> UpdateResult {
    let Some(doc) = state.workflow.document() else {
        state.show_notice(NoticeKind::Error, NO_DOCUMENT_TO_EXPORT);
        return UpdateResult::none();
    };
    UpdateResult::action(UpdateAction::ExportDocument {
        directory: state.settings.export.directory(),
        text: doc.edited_text().to_string(),
    })
}

pub fn handle_exported(state: &mut AppState, path: PathBuf) -> UpdateResult {
    state.show_notice(
        NoticeKind::Success,
        format!("Exported to {}", path.display()),
    );
    state.last_export = Some(path);
    state.export_count += 1;
    UpdateResult::none()
}

pub fn handle_open_library(state: &mut AppState) -> UpdateResult {
    if state.phase().is_loading() || state.ui_mode != UiMode::Normal {
        return UpdateResult::none();
    }
    state.open_library();
    UpdateResult::action(UpdateAction::ListDocuments)
}

pub fn handle_documents_listed(
    state: &mut AppState,
    documents: Vec<DocumentSummary>,
) -> UpdateResult {
    if state.ui_mode != UiMode::Library {
        debug!("Library closed before {} documents arrived", documents.len());
        return UpdateResult::none();
    }
    state.library.loading = false;
    state.library.selected = 0;
    state.library.documents = documents;
    UpdateResult::none()
}
