//! Application state (Model in TEA pattern)

use std::path::PathBuf;
use std::time::{Duration, Instant};

use lexguard_core::{AnalysisPhase, DocumentSummary, InputMode};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::editor::EditorState;
use crate::presenter::{self, ResultsView};
use crate::workflow::Workflow;

/// How long a notice stays on the status line
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Overlay currently capturing input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// Document library modal
    Library,
    /// Confirmation dialog (quit with unsaved edits)
    ConfirmDialog,
}

/// Which analysis-screen panel receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Editor,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Transient status-line message
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Document library modal state
#[derive(Debug, Clone, Default)]
pub struct LibraryState {
    pub loading: bool,
    pub documents: Vec<DocumentSummary>,
    pub selected: usize,
}

impl LibraryState {
    pub fn selected_document(&self) -> Option<&DocumentSummary> {
        self.documents.get(self.selected)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.documents.len() {
            self.selected += 1;
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    pub workflow: Workflow,

    /// File path input (upload mode)
    pub path_input: EditorState,

    /// Pasted text input (text mode)
    pub text_input: EditorState,

    /// Inline validation error on the input screen
    pub input_error: Option<String>,

    pub ui_mode: UiMode,
    pub focus: Focus,

    /// Index into the presented (severity-ordered) risk cards
    pub risk_cursor: usize,

    pub notice: Option<Notice>,
    pub library: LibraryState,
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Set while an update call is in flight
    pub saving: bool,

    /// Most recent export target
    pub last_export: Option<PathBuf>,
    /// Bumped on every successful export
    pub export_count: u64,

    /// Spinner frame, advanced on every tick
    pub animation_frame: u64,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            workflow: Workflow::new(),
            path_input: EditorState::single_line(),
            text_input: EditorState::new(""),
            input_error: None,
            ui_mode: UiMode::Normal,
            focus: Focus::Editor,
            risk_cursor: 0,
            notice: None,
            library: LibraryState::default(),
            confirm_dialog_state: None,
            saving: false,
            last_export: None,
            export_count: 0,
            animation_frame: 0,
            quitting: false,
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.workflow.phase()
    }

    /// The analysis screen is shown only once a document is ready
    pub fn shows_analysis(&self) -> bool {
        self.workflow.document().is_some()
    }

    /// Input buffer for the current mode
    pub fn active_input(&self) -> &EditorState {
        match self.workflow.mode() {
            InputMode::Upload => &self.path_input,
            InputMode::Text => &self.text_input,
        }
    }

    pub fn active_input_mut(&mut self) -> &mut EditorState {
        match self.workflow.mode() {
            InputMode::Upload => &mut self.path_input,
            InputMode::Text => &mut self.text_input,
        }
    }

    /// Error shown on the input screen: local validation first, then the
    /// workflow's remote error.
    pub fn visible_error(&self) -> Option<&str> {
        self.input_error
            .as_deref()
            .or_else(|| self.workflow.error_message())
    }

    pub fn has_unsaved_edits(&self) -> bool {
        self.workflow.document().is_some_and(|d| d.is_dirty())
    }

    /// View model of the results panel for the current document
    pub fn results_view(&self) -> Option<ResultsView> {
        let doc = self.workflow.document()?;
        Some(presenter::present(
            doc.summary.as_deref(),
            doc.risks(),
            self.workflow.selected_risk_id(),
        ))
    }

    /// Id of the risk card under the cursor
    pub fn risk_at_cursor(&self) -> Option<String> {
        let doc = self.workflow.document()?;
        presenter::ordered(doc.risks())
            .get(self.risk_cursor)
            .map(|r| r.id.clone())
    }

    pub fn show_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice::new(kind, text));
    }

    /// Drop the notice once it has expired
    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Library
    // ─────────────────────────────────────────────────────────

    pub fn open_library(&mut self) {
        self.library = LibraryState {
            loading: true,
            ..LibraryState::default()
        };
        self.ui_mode = UiMode::Library;
    }

    pub fn close_library(&mut self) {
        self.library = LibraryState::default();
        if self.ui_mode == UiMode::Library {
            self.ui_mode = UiMode::Normal;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    /// Request to quit, asking for confirmation when edits are unsaved
    pub fn request_quit(&mut self) {
        if self.has_unsaved_edits() && self.settings.behavior.confirm_quit_unsaved {
            self.confirm_dialog_state = Some(ConfirmDialogState::unsaved_quit());
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.quitting = true;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.quitting = true;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.quitting = true;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
