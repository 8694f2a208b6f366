//! Tests for the update function

use std::path::PathBuf;

use lexguard_client::test_utils::{sample_record, sample_result, sample_risk};
use lexguard_core::intake::{
    MAX_UPLOAD_BYTES, MSG_FILE_TOO_LARGE, MSG_TEXT_TOO_SHORT, MSG_UNSUPPORTED_TYPE,
};
use lexguard_core::{AnalysisPhase, DocumentId, InputMode, ResultTab, Severity};
use tempfile::TempDir;

use super::analysis::{LOAD_FAILED_MESSAGE, MSG_NO_FILE};
use super::persistence::{NO_DOCUMENT_TO_SAVE, SAVE_SUCCESS_MESSAGE};
use super::*;
use crate::input_key::InputKey;
use crate::message::{Message, TextEdit};
use crate::state::{AppState, Focus, NoticeKind, UiMode};

/// Run a message and its follow-ups, collecting every action
fn run(state: &mut AppState, msg: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(msg);
    while let Some(m) = next {
        let result = update(state, m);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

fn key(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(key))
}

fn type_str(state: &mut AppState, s: &str) {
    for c in s.chars() {
        key(state, InputKey::Char(c));
    }
}

const LEASE: &str = "The Tenant shall indemnify the Landlord against all claims.";

/// Submit text and complete the analysis with `risks`
fn ready_state(risks: Vec<lexguard_core::Risk>) -> AppState {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::SubmitText(LEASE.to_string()));
    let generation = match &actions[..] {
        [UpdateAction::AnalyzeText { generation, .. }] => *generation,
        other => panic!("expected AnalyzeText, got {other:?}"),
    };
    run(
        &mut state,
        Message::AnalysisCompleted {
            generation,
            result: Box::new(sample_result(7, LEASE, risks)),
            submitted_text: Some(LEASE.to_string()),
            file_name: None,
        },
    );
    assert_eq!(state.phase(), AnalysisPhase::Ready);
    state
}

// ─────────────────────────────────────────────────────────
// Input acquisition
// ─────────────────────────────────────────────────────────

#[test]
fn test_upload_txt_file_then_single_high_risk_card() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lease.txt");
    let body = "x".repeat(2 * 1024);
    std::fs::write(&path, &body).unwrap();

    let mut state = AppState::new();
    let actions = run(&mut state, Message::SubmitFile(path));

    let (generation, upload) = match actions.into_iter().next() {
        Some(UpdateAction::AnalyzeDocument { generation, upload }) => (generation, upload),
        other => panic!("expected AnalyzeDocument, got {other:?}"),
    };
    assert_eq!(upload.bytes, body.as_bytes());
    assert_eq!(state.phase(), AnalysisPhase::Loading);

    let result: lexguard_core::AnalysisResult = serde_json::from_value(serde_json::json!({
        "document_id": 7,
        "text": body,
        "risks_found": 1,
        "risks": [{"id": "r1", "severity": "high", "clause": "x", "risk_type": "Indemnity"}]
    }))
    .unwrap();

    run(
        &mut state,
        Message::AnalysisCompleted {
            generation,
            result: Box::new(result),
            submitted_text: None,
            file_name: Some("lease.txt".into()),
        },
    );

    assert_eq!(state.phase(), AnalysisPhase::Ready);
    assert_eq!(state.workflow.active_tab(), ResultTab::Summary);
    let view = state.results_view().unwrap();
    assert_eq!(view.cards().len(), 1);
    assert_eq!(view.cards()[0].severity, Severity::High);
    assert_eq!(view.risk_count, 1);
}

#[test]
fn test_oversized_upload_rejected_without_action() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("huge.pdf");
    std::fs::File::create(&path)
        .unwrap()
        .set_len(MAX_UPLOAD_BYTES + 1024 * 1024)
        .unwrap();

    let mut state = AppState::new();
    let actions = run(&mut state, Message::SubmitFile(path));

    assert!(actions.is_empty());
    assert_eq!(state.phase(), AnalysisPhase::Idle);
    assert_eq!(state.visible_error(), Some(MSG_FILE_TOO_LARGE));
}

#[test]
fn test_unsupported_upload_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.jpg");
    std::fs::write(&path, b"jpg").unwrap();

    let mut state = AppState::new();
    assert!(run(&mut state, Message::SubmitFile(path)).is_empty());
    assert_eq!(state.input_error.as_deref(), Some(MSG_UNSUPPORTED_TYPE));
}

#[test]
fn test_short_text_rejected_locally() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::SubmitText("short".into()));

    assert!(actions.is_empty());
    assert_eq!(state.phase(), AnalysisPhase::Idle);
    assert_eq!(state.input_error.as_deref(), Some(MSG_TEXT_TOO_SHORT));
}

#[test]
fn test_validation_error_keeps_error_phase() {
    let mut state = AppState::new();
    let generation = state.workflow.begin().unwrap();
    state.workflow.fail(generation, "Failed to analyze text");

    run(&mut state, Message::SubmitText("tiny".into()));
    assert_eq!(state.phase(), AnalysisPhase::Error);
    assert_eq!(state.visible_error(), Some(MSG_TEXT_TOO_SHORT));
}

#[test]
fn test_typed_text_submits_with_f5() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Tab);
    assert_eq!(state.workflow.mode(), InputMode::Text);

    type_str(&mut state, "Line one of the contract");
    key(&mut state, InputKey::Enter);
    type_str(&mut state, "Line two");
    assert_eq!(state.text_input.text(), "Line one of the contract\nLine two");

    let actions = key(&mut state, InputKey::F(5));
    assert!(matches!(
        &actions[..],
        [UpdateAction::AnalyzeText { text, .. }] if text == "Line one of the contract\nLine two"
    ));
}

#[test]
fn test_enter_submits_path_in_upload_mode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("terms.txt");
    std::fs::write(&path, "Terms and conditions apply.").unwrap();

    let mut state = AppState::new();
    run(&mut state, Message::Paste(path.display().to_string()));
    let actions = key(&mut state, InputKey::Enter);

    assert!(matches!(&actions[..], [UpdateAction::AnalyzeDocument { .. }]));
}

#[test]
fn test_empty_path_shows_hint() {
    let mut state = AppState::new();
    assert!(key(&mut state, InputKey::Enter).is_empty());
    assert_eq!(state.input_error.as_deref(), Some(MSG_NO_FILE));
}

#[test]
fn test_second_submit_while_loading_rejected() {
    let mut state = AppState::new();
    assert_eq!(run(&mut state, Message::SubmitText(LEASE.into())).len(), 1);
    assert!(run(&mut state, Message::SubmitText(LEASE.into())).is_empty());
    assert_eq!(state.workflow.generation(), 1);
}

#[test]
fn test_inputs_disabled_while_loading() {
    let mut state = AppState::new();
    state.workflow.set_mode(InputMode::Text);
    run(&mut state, Message::SubmitText(LEASE.into()));

    key(&mut state, InputKey::Char('z'));
    key(&mut state, InputKey::Tab);
    assert_eq!(state.text_input.text(), "");
    assert_eq!(state.workflow.mode(), InputMode::Text);
}

// ─────────────────────────────────────────────────────────
// Replies
// ─────────────────────────────────────────────────────────

#[test]
fn test_analysis_failure_shows_message() {
    let mut state = AppState::new();
    run(&mut state, Message::SubmitText(LEASE.into()));
    run(
        &mut state,
        Message::AnalysisFailed {
            generation: 1,
            message: "Could not extract text".into(),
        },
    );

    assert_eq!(state.phase(), AnalysisPhase::Error);
    assert_eq!(state.visible_error(), Some("Could not extract text"));
    assert!(state.workflow.document().is_none());
}

#[test]
fn test_load_document_failure_uses_fixed_message() {
    let mut state = AppState::new();
    let actions = run(&mut state, Message::LoadDocument(DocumentId(42)));
    assert!(matches!(
        &actions[..],
        [UpdateAction::LoadDocument { id: DocumentId(42), .. }]
    ));

    run(
        &mut state,
        Message::DocumentLoadFailed {
            generation: 1,
            id: DocumentId(42),
            message: "connection refused".into(),
        },
    );

    assert_eq!(state.phase(), AnalysisPhase::Error);
    assert_eq!(state.workflow.error_message(), Some(LOAD_FAILED_MESSAGE));
    assert!(state.workflow.document().is_none());
}

#[test]
fn test_load_document_success() {
    let mut state = AppState::new();
    run(&mut state, Message::LoadDocument(DocumentId(42)));
    run(
        &mut state,
        Message::DocumentLoaded {
            generation: 1,
            id: DocumentId(42),
            record: Box::new(sample_record(42, "Original", Some("Edited"))),
        },
    );

    let doc = state.workflow.document().unwrap();
    assert_eq!(doc.edited_text(), "Edited");
    assert_eq!(doc.original_text(), "Original");
    assert_eq!(state.workflow.active_tab(), ResultTab::Summary);
}

#[test]
fn test_reply_after_reset_is_discarded() {
    let mut state = AppState::new();
    run(&mut state, Message::SubmitText(LEASE.into()));
    run(&mut state, Message::Reset);

    run(
        &mut state,
        Message::AnalysisCompleted {
            generation: 1,
            result: Box::new(sample_result(7, LEASE, vec![])),
            submitted_text: Some(LEASE.into()),
            file_name: None,
        },
    );
    assert_eq!(state.phase(), AnalysisPhase::Idle);
    assert!(state.workflow.document().is_none());
}

#[test]
fn test_ready_invariants() {
    let state = ready_state(vec![
        sample_risk("a", Severity::Low),
        sample_risk("b", Severity::High),
    ]);
    let doc = state.workflow.document().unwrap();
    assert_eq!(doc.risks_found(), doc.risks().len());
    assert_eq!(state.workflow.active_tab(), ResultTab::Summary);
    assert_eq!(state.focus, Focus::Editor);
}

// ─────────────────────────────────────────────────────────
// Results panel
// ─────────────────────────────────────────────────────────

#[test]
fn test_results_keys_switch_tabs() {
    let mut state = ready_state(vec![]);
    key(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Results);

    key(&mut state, InputKey::Char('3'));
    assert_eq!(state.workflow.active_tab(), ResultTab::Risks);
    key(&mut state, InputKey::Right);
    assert_eq!(state.workflow.active_tab(), ResultTab::Summary);
    key(&mut state, InputKey::Left);
    assert_eq!(state.workflow.active_tab(), ResultTab::Risks);
}

#[test]
fn test_risk_cursor_follows_display_order() {
    let mut state = ready_state(vec![
        sample_risk("low", Severity::Low),
        sample_risk("high", Severity::High),
    ]);
    key(&mut state, InputKey::Tab);

    key(&mut state, InputKey::Enter);
    assert_eq!(state.workflow.selected_risk_id(), Some("high"));

    key(&mut state, InputKey::Down);
    key(&mut state, InputKey::Down);
    assert_eq!(state.risk_cursor, 1);
    key(&mut state, InputKey::Char(' '));
    assert_eq!(state.workflow.selected_risk_id(), Some("low"));

    key(&mut state, InputKey::Char(' '));
    assert_eq!(state.workflow.selected_risk_id(), None);
}

#[test]
fn test_select_risk_messages_toggle() {
    let mut state = ready_state(vec![
        sample_risk("x", Severity::Medium),
        sample_risk("y", Severity::Medium),
    ]);

    run(&mut state, Message::SelectRisk("x".into()));
    run(&mut state, Message::SelectRisk("x".into()));
    assert_eq!(state.workflow.selected_risk_id(), None);

    run(&mut state, Message::SelectRisk("x".into()));
    run(&mut state, Message::SelectRisk("y".into()));
    assert_eq!(state.workflow.selected_risk_id(), Some("y"));

    run(&mut state, Message::SelectRisk("nope".into()));
    assert_eq!(state.workflow.selected_risk_id(), Some("y"));
}

// ─────────────────────────────────────────────────────────
// Editor & persistence
// ─────────────────────────────────────────────────────────

#[test]
fn test_save_sends_edited_text_once() {
    let mut state = ready_state(vec![]);
    key(&mut state, InputKey::End);
    type_str(&mut state, " Amended.");
    assert!(state.has_unsaved_edits());

    let actions = key(&mut state, InputKey::CharCtrl('s'));
    let expected = format!("{LEASE} Amended.");
    match &actions[..] {
        [UpdateAction::SaveDocument { id, text, .. }] => {
            assert_eq!(*id, DocumentId(7));
            assert_eq!(text, &expected);
        }
        other => panic!("expected one SaveDocument, got {other:?}"),
    }
    assert_eq!(state.workflow.document().unwrap().original_text(), LEASE);
    assert_eq!(state.phase(), AnalysisPhase::Ready);
}

#[test]
fn test_saved_reply_clears_dirty_and_notifies() {
    let mut state = ready_state(vec![]);
    type_str(&mut state, "Edit ");
    let text = state.workflow.document().unwrap().edited_text().to_string();
    run(&mut state, Message::Save);

    let generation = state.workflow.generation();
    run(
        &mut state,
        Message::DocumentSaved {
            generation,
            id: DocumentId(7),
            text,
        },
    );

    assert!(!state.has_unsaved_edits());
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, SAVE_SUCCESS_MESSAGE);
    assert!(!state.saving);
}

#[test]
fn test_save_failure_keeps_edits_and_phase() {
    let mut state = ready_state(vec![]);
    type_str(&mut state, "Edit ");
    run(&mut state, Message::Save);

    let generation = state.workflow.generation();
    run(
        &mut state,
        Message::SaveFailed {
            generation,
            message: "Failed to save document".into(),
        },
    );

    assert_eq!(state.phase(), AnalysisPhase::Ready);
    assert!(state.has_unsaved_edits());
    assert!(state
        .workflow
        .document()
        .unwrap()
        .edited_text()
        .starts_with("Edit "));
    assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);

    // Retry is allowed
    assert_eq!(run(&mut state, Message::Save).len(), 1);
}

#[test]
fn test_second_save_while_first_in_flight_is_ignored() {
    let mut state = ready_state(vec![]);
    type_str(&mut state, "A ");
    assert_eq!(key(&mut state, InputKey::CharCtrl('s')).len(), 1);
    assert!(state.saving);

    type_str(&mut state, "B ");
    assert!(key(&mut state, InputKey::CharCtrl('s')).is_empty());
    assert!(state.saving);

    // Once the reply lands the newer edits can be saved
    let generation = state.workflow.generation();
    run(
        &mut state,
        Message::DocumentSaved {
            generation,
            id: DocumentId(7),
            text: format!("A {LEASE}"),
        },
    );
    assert!(state.has_unsaved_edits());
    match &key(&mut state, InputKey::CharCtrl('s'))[..] {
        [UpdateAction::SaveDocument { text, .. }] => assert!(text.starts_with("A B ")),
        other => panic!("expected one SaveDocument, got {other:?}"),
    }
}

#[test]
fn test_saving_unchanged_text_twice_is_idempotent() {
    let mut state = ready_state(vec![]);
    type_str(&mut state, "Edit ");

    let mut saved = Vec::new();
    for _ in 0..2 {
        let text = match &run(&mut state, Message::Save)[..] {
            [UpdateAction::SaveDocument { text, .. }] => text.clone(),
            other => panic!("expected one SaveDocument, got {other:?}"),
        };
        let generation = state.workflow.generation();
        run(
            &mut state,
            Message::DocumentSaved {
                generation,
                id: DocumentId(7),
                text: text.clone(),
            },
        );
        assert!(!state.has_unsaved_edits());
        saved.push(text);
    }

    assert_eq!(saved[0], saved[1]);
    let doc = state.workflow.document().unwrap();
    assert_eq!(doc.edited_text(), saved[1]);
    assert_eq!(doc.original_text(), LEASE);
}

#[test]
fn test_crlf_analysis_is_not_dirty_before_edits() {
    let text = "Clause one.\r\nClause two is here.";
    let mut state = AppState::new();
    run(&mut state, Message::SubmitText(text.into()));
    let generation = state.workflow.generation();
    run(
        &mut state,
        Message::AnalysisCompleted {
            generation,
            result: Box::new(sample_result(4, text, vec![])),
            submitted_text: Some(text.into()),
            file_name: None,
        },
    );

    let doc = state.workflow.document().unwrap();
    assert_eq!(doc.original_text(), "Clause one.\nClause two is here.");
    assert_eq!(doc.edited_text(), doc.original_text());
    assert!(!state.has_unsaved_edits());
}

#[test]
fn test_save_without_id_is_guarded() {
    let mut state = AppState::new();
    run(&mut state, Message::SubmitText(LEASE.into()));
    let mut result = sample_result(1, LEASE, vec![]);
    result.document_id = None;
    run(
        &mut state,
        Message::AnalysisCompleted {
            generation: 1,
            result: Box::new(result),
            submitted_text: Some(LEASE.into()),
            file_name: None,
        },
    );

    assert!(run(&mut state, Message::Save).is_empty());
    assert_eq!(state.notice.as_ref().unwrap().text, NO_DOCUMENT_TO_SAVE);
}

#[test]
fn test_stale_save_reply_only_logs() {
    let mut state = ready_state(vec![]);
    type_str(&mut state, "Edit ");
    run(&mut state, Message::Save);
    let stale = state.workflow.generation();
    run(&mut state, Message::Reset);

    run(
        &mut state,
        Message::SaveFailed {
            generation: stale,
            message: "Failed to save document".into(),
        },
    );
    assert!(state.notice.is_none());
}

#[test]
fn test_export_uses_edited_text_and_settings_directory() {
    let mut state = ready_state(vec![]);
    state.settings.export.directory = Some(PathBuf::from("/tmp/exports"));
    type_str(&mut state, ">> ");

    let actions = key(&mut state, InputKey::CharCtrl('e'));
    match &actions[..] {
        [UpdateAction::ExportDocument { directory, text }] => {
            assert_eq!(directory, &PathBuf::from("/tmp/exports"));
            assert!(text.starts_with(">> "));
        }
        other => panic!("expected ExportDocument, got {other:?}"),
    }

    run(
        &mut state,
        Message::Exported {
            path: PathBuf::from("/tmp/exports/edited-document.txt"),
        },
    );
    assert_eq!(state.export_count, 1);
}

#[test]
fn test_reset_returns_to_input_screen() {
    let mut state = ready_state(vec![sample_risk("a", Severity::High)]);
    run(&mut state, Message::SelectRisk("a".into()));
    key(&mut state, InputKey::CharCtrl('n'));

    assert_eq!(state.phase(), AnalysisPhase::Idle);
    assert!(state.workflow.document().is_none());
    assert!(state.workflow.selected_risk_id().is_none());
    assert!(!state.shows_analysis());
}

#[test]
fn test_mode_toggle_ignored_when_ready() {
    let mut state = ready_state(vec![]);
    run(&mut state, Message::ToggleMode);
    assert_eq!(state.workflow.mode(), InputMode::Upload);
}

// ─────────────────────────────────────────────────────────
// Library
// ─────────────────────────────────────────────────────────

#[test]
fn test_library_flow_loads_selected_document() {
    let mut state = AppState::new();
    let actions = key(&mut state, InputKey::CharCtrl('o'));
    assert!(matches!(&actions[..], [UpdateAction::ListDocuments]));
    assert_eq!(state.ui_mode, UiMode::Library);

    let documents = serde_json::from_value(serde_json::json!([
        {"id": 1, "filename": "a.pdf"},
        {"id": 2, "filename": "b.pdf"}
    ]))
    .unwrap();
    run(&mut state, Message::DocumentsListed { documents });

    key(&mut state, InputKey::Down);
    let actions = key(&mut state, InputKey::Enter);
    assert!(matches!(
        &actions[..],
        [UpdateAction::LoadDocument { id: DocumentId(2), .. }]
    ));
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.phase(), AnalysisPhase::Loading);
}

#[test]
fn test_library_failure_closes_modal() {
    let mut state = AppState::new();
    run(&mut state, Message::OpenLibrary);
    run(
        &mut state,
        Message::DocumentListFailed {
            message: "Failed to load documents".into(),
        },
    );
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_ctrl_c_quits_immediately() {
    let mut state = ready_state(vec![]);
    type_str(&mut state, "unsaved");
    key(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_quit_with_unsaved_edits_asks_first() {
    let mut state = ready_state(vec![]);
    type_str(&mut state, "unsaved");
    key(&mut state, InputKey::CharCtrl('q'));

    assert!(!state.should_quit());
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

    key(&mut state, InputKey::Char('n'));
    assert_eq!(state.ui_mode, UiMode::Normal);

    key(&mut state, InputKey::CharCtrl('q'));
    key(&mut state, InputKey::Char('y'));
    assert!(state.should_quit());
}

#[test]
fn test_quit_without_confirmation_when_disabled() {
    let mut state = ready_state(vec![]);
    state.settings.behavior.confirm_quit_unsaved = false;
    type_str(&mut state, "unsaved");
    key(&mut state, InputKey::CharCtrl('q'));
    assert!(state.should_quit());
}

#[test]
fn test_paste_goes_to_editor() {
    let mut state = ready_state(vec![]);
    run(&mut state, Message::Paste("PREFIX\r\n".into()));
    assert!(state
        .workflow
        .document()
        .unwrap()
        .edited_text()
        .starts_with("PREFIX\n"));
}

#[test]
fn test_handle_key_maps_save() {
    let state = ready_state(vec![]);
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('s')),
        Some(Message::Save)
    ));
}

#[test]
fn test_text_edit_enum_roundtrip_through_edit_message() {
    let mut state = AppState::new();
    run(&mut state, Message::Edit(TextEdit::InsertStr("/tmp/x.pdf".into())));
    run(&mut state, Message::Edit(TextEdit::Backspace));
    assert_eq!(state.path_input.text(), "/tmp/x.pd");
}
