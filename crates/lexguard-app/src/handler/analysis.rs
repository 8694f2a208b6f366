//! Submission, load-by-id and analysis reply handlers

use std::path::{Path, PathBuf};

use lexguard_core::prelude::*;
use lexguard_core::{AnalysisResult, DocumentId, DocumentRecord, InputMode};

use crate::document::DocumentContext;
use crate::intake::{acquire_file, acquire_text};
use crate::message::{Message, TextEdit};
use crate::state::{AppState, Focus};

use super::{UpdateAction, UpdateResult};

/// Shown for any load-by-id failure, whatever the server said
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load document";

pub const MSG_NO_FILE: &str = "Please enter the path of a PDF, DOCX, or TXT file";

/// Submit the active input buffer
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.shows_analysis() {
        return UpdateResult::none();
    }
    match state.workflow.mode() {
        InputMode::Upload => {
            let raw = state.path_input.text().trim();
            if raw.is_empty() {
                state.input_error = Some(MSG_NO_FILE.to_string());
                return UpdateResult::none();
            }
            UpdateResult::message(Message::SubmitFile(expand_home(raw)))
        }
        InputMode::Text => {
            UpdateResult::message(Message::SubmitText(state.text_input.text().to_string()))
        }
    }
}

pub fn handle_submit_file(state: &mut AppState, path: &Path) -> UpdateResult {
    if !state.phase().accepts_submit() {
        debug!("Ignoring file submit while loading");
        return UpdateResult::none();
    }

    let upload = match acquire_file(path) {
        Ok(upload) => upload,
        Err(e) => {
            debug!("Rejected {}: {}", path.display(), e);
            state.input_error = Some(e.user_message());
            return UpdateResult::none();
        }
    };

    match state.workflow.begin() {
        Some(generation) => {
            state.input_error = None;
            UpdateResult::action(UpdateAction::AnalyzeDocument { generation, upload })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_submit_text(state: &mut AppState, text: String) -> UpdateResult {
    if !state.phase().accepts_submit() {
        debug!("Ignoring text submit while loading");
        return UpdateResult::none();
    }

    let text = match acquire_text(&text) {
        Ok(text) => text,
        Err(e) => {
            state.input_error = Some(e.user_message());
            return UpdateResult::none();
        }
    };

    match state.workflow.begin() {
        Some(generation) => {
            state.input_error = None;
            UpdateResult::action(UpdateAction::AnalyzeText { generation, text })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_load_document(state: &mut AppState, id: DocumentId) -> UpdateResult {
    state.close_library();
    match state.workflow.begin() {
        Some(generation) => {
            info!("Loading document {}", id);
            state.input_error = None;
            UpdateResult::action(UpdateAction::LoadDocument { generation, id })
        }
        None => UpdateResult::none(),
    }
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    if state.workflow.reset() {
        state.path_input.clear();
        state.text_input.clear();
        state.input_error = None;
        state.focus = Focus::Editor;
        state.risk_cursor = 0;
        state.saving = false;
    }
    UpdateResult::none()
}

/// Route an edit to the focused buffer
pub fn handle_edit(state: &mut AppState, edit: TextEdit) -> UpdateResult {
    if state.shows_analysis() {
        if state.focus == Focus::Editor {
            if let Some(doc) = state.workflow.document_mut() {
                doc.editor.apply(edit);
            }
        }
        return UpdateResult::none();
    }

    // Inputs are disabled while a request is in flight
    if state.phase().is_loading() {
        return UpdateResult::none();
    }
    state.active_input_mut().apply(edit);
    state.input_error = None;
    UpdateResult::none()
}

pub fn handle_analysis_completed(
    state: &mut AppState,
    generation: u64,
    result: AnalysisResult,
    submitted_text: Option<String>,
    file_name: Option<String>,
) -> UpdateResult {
    let doc = DocumentContext::from_analysis(
        result,
        submitted_text.as_deref(),
        file_name.as_deref(),
    );
    let (name, risks) = (doc.name.clone(), doc.risks_found());

    if state.workflow.complete(generation, doc) {
        info!("Analysis ready: {} ({} risks)", name, risks);
        enter_ready(state);
    }
    UpdateResult::none()
}

pub fn handle_document_loaded(
    state: &mut AppState,
    generation: u64,
    id: DocumentId,
    record: DocumentRecord,
) -> UpdateResult {
    if state
        .workflow
        .complete(generation, DocumentContext::from_record(record, id))
    {
        info!("Loaded document {}", id);
        enter_ready(state);
    }
    UpdateResult::none()
}

fn enter_ready(state: &mut AppState) {
    state.focus = Focus::Editor;
    state.risk_cursor = 0;
    state.saving = false;
    state.input_error = None;
}

/// Expand a leading `~/` to the home directory
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}
