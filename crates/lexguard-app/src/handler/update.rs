//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use lexguard_core::prelude::*;

use crate::message::{Message, TextEdit};
use crate::state::{AppState, Focus, NoticeKind, UiMode};

use super::{analysis, keys::handle_key, persistence, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => analysis::handle_edit(state, TextEdit::InsertStr(text)),

        Message::Tick => {
            state.animation_frame = state.animation_frame.wrapping_add(1);
            state.expire_notice(Instant::now());
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Input
        // ─────────────────────────────────────────────────────────
        Message::ToggleMode => {
            let next = state.workflow.mode().toggled();
            if state.workflow.set_mode(next) {
                state.input_error = None;
            }
            UpdateResult::none()
        }

        Message::Submit => analysis::handle_submit(state),
        Message::SubmitFile(path) => analysis::handle_submit_file(state, &path),
        Message::SubmitText(text) => analysis::handle_submit_text(state, text),
        Message::LoadDocument(id) => analysis::handle_load_document(state, id),
        Message::Reset => analysis::handle_reset(state),
        Message::Edit(edit) => analysis::handle_edit(state, edit),

        // ─────────────────────────────────────────────────────────
        // Results panel
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            if state.shows_analysis() {
                state.focus = match state.focus {
                    Focus::Editor => Focus::Results,
                    Focus::Results => Focus::Editor,
                };
            }
            UpdateResult::none()
        }

        Message::SelectTab(tab) => {
            state.workflow.select_tab(tab);
            UpdateResult::none()
        }

        Message::NextTab => {
            let tab = state.workflow.active_tab().next();
            state.workflow.select_tab(tab);
            UpdateResult::none()
        }

        Message::PrevTab => {
            let tab = state.workflow.active_tab().prev();
            state.workflow.select_tab(tab);
            UpdateResult::none()
        }

        Message::RiskCursorUp => {
            state.risk_cursor = state.risk_cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::RiskCursorDown => {
            let count = state
                .workflow
                .document()
                .map(|d| d.risks_found())
                .unwrap_or(0);
            if state.risk_cursor + 1 < count {
                state.risk_cursor += 1;
            }
            UpdateResult::none()
        }

        Message::ToggleRiskAtCursor => match state.risk_at_cursor() {
            Some(id) => UpdateResult::message(Message::SelectRisk(id)),
            None => UpdateResult::none(),
        },

        Message::SelectRisk(id) => {
            state.workflow.select_risk(&id);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Persistence & library
        // ─────────────────────────────────────────────────────────
        Message::Save => persistence::handle_save(state),
        Message::Export => persistence::handle_export(state),
        Message::OpenLibrary => persistence::handle_open_library(state),

        Message::CloseLibrary => {
            state.close_library();
            UpdateResult::none()
        }

        Message::LibraryUp => {
            state.library.move_up();
            UpdateResult::none()
        }

        Message::LibraryDown => {
            state.library.move_down();
            UpdateResult::none()
        }

        Message::LibraryOpenSelected => {
            if state.ui_mode != UiMode::Library {
                return UpdateResult::none();
            }
            match state.library.selected_document() {
                Some(doc) => UpdateResult::message(Message::LoadDocument(doc.id)),
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Background task results
        // ─────────────────────────────────────────────────────────
        Message::AnalysisCompleted {
            generation,
            result,
            submitted_text,
            file_name,
        } => analysis::handle_analysis_completed(
            state,
            generation,
            *result,
            submitted_text,
            file_name,
        ),

        Message::AnalysisFailed {
            generation,
            message,
        } => {
            if state.workflow.fail(generation, message.clone()) {
                warn!("Analysis failed: {}", message);
            }
            UpdateResult::none()
        }

        Message::DocumentLoaded {
            generation,
            id,
            record,
        } => analysis::handle_document_loaded(state, generation, id, *record),

        Message::DocumentLoadFailed {
            generation,
            id,
            message,
        } => {
            if state
                .workflow
                .fail(generation, analysis::LOAD_FAILED_MESSAGE)
            {
                warn!("Failed to load document {}: {}", id, message);
            }
            UpdateResult::none()
        }

        Message::DocumentSaved {
            generation,
            id,
            text,
        } => persistence::handle_saved(state, generation, id, &text),

        Message::SaveFailed {
            generation,
            message,
        } => persistence::handle_save_failed(state, generation, message),

        Message::Exported { path } => persistence::handle_exported(state, path),

        Message::ExportFailed { message } => {
            warn!("Export failed: {}", message);
            state.show_notice(NoticeKind::Error, format!("Export failed: {message}"));
            UpdateResult::none()
        }

        Message::DocumentsListed { documents } => {
            persistence::handle_documents_listed(state, documents)
        }

        Message::DocumentListFailed { message } => {
            warn!("Failed to list documents: {}", message);
            state.close_library();
            state.show_notice(NoticeKind::Error, message);
            UpdateResult::none()
        }
    }
}
