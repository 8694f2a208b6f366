//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use lexguard_core::{AnalysisResult, DocumentId, DocumentRecord, DocumentSummary, ResultTab};

use crate::input_key::InputKey;

/// An edit applied to whichever text buffer has focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    InsertStr(String),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Bracketed paste from terminal
    Paste(String),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog if edits are unsaved)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C, signal handler)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Input Messages
    // ─────────────────────────────────────────────────────────
    /// Switch between file upload and pasted text
    ToggleMode,
    /// Submit whatever the current input mode holds
    Submit,
    /// Validate and upload a local file
    SubmitFile(PathBuf),
    /// Validate and submit text
    SubmitText(String),
    /// Load a stored document by id
    LoadDocument(DocumentId),
    /// Discard the current analysis and return to the input screen
    Reset,
    /// Edit the focused text buffer
    Edit(TextEdit),

    // ─────────────────────────────────────────────────────────
    // Result Panel Messages
    // ─────────────────────────────────────────────────────────
    ToggleFocus,
    SelectTab(ResultTab),
    NextTab,
    PrevTab,
    RiskCursorUp,
    RiskCursorDown,
    /// Toggle the risk card under the cursor
    ToggleRiskAtCursor,
    /// Toggle a risk card by id
    SelectRisk(String),

    // ─────────────────────────────────────────────────────────
    // Persistence Messages
    // ─────────────────────────────────────────────────────────
    Save,
    Export,

    // ─────────────────────────────────────────────────────────
    // Document Library Messages
    // ─────────────────────────────────────────────────────────
    OpenLibrary,
    CloseLibrary,
    LibraryUp,
    LibraryDown,
    /// Load the highlighted library entry
    LibraryOpenSelected,

    // ─────────────────────────────────────────────────────────
    // Background Task Results
    // ─────────────────────────────────────────────────────────
    AnalysisCompleted {
        generation: u64,
        result: Box<AnalysisResult>,
        /// Text sent for analysis, when it came from the text path
        submitted_text: Option<String>,
        /// Local file name, when it came from the upload path
        file_name: Option<String>,
    },
    AnalysisFailed {
        generation: u64,
        message: String,
    },
    DocumentLoaded {
        generation: u64,
        id: DocumentId,
        record: Box<DocumentRecord>,
    },
    DocumentLoadFailed {
        generation: u64,
        id: DocumentId,
        message: String,
    },
    DocumentSaved {
        generation: u64,
        id: DocumentId,
        /// The text that was persisted
        text: String,
    },
    SaveFailed {
        generation: u64,
        message: String,
    },
    Exported {
        path: PathBuf,
    },
    ExportFailed {
        message: String,
    },
    DocumentsListed {
        documents: Vec<DocumentSummary>,
    },
    DocumentListFailed {
        message: String,
    },
}
