//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON lines.

use std::path::PathBuf;

use lexguard_core::{AnalysisPhase, DocumentId};

/// Domain events emitted by the Engine.
///
/// Subscribers see events in processing order, after the state change that
/// produced them has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Workflow
    // ─────────────────────────────────────────────────────────
    /// The analysis phase changed
    PhaseChanged {
        old_phase: AnalysisPhase,
        new_phase: AnalysisPhase,
    },

    /// A submission or load-by-id was accepted and a request is in flight
    AnalysisStarted { generation: u64 },

    /// A document is ready for review
    AnalysisCompleted {
        document_id: Option<DocumentId>,
        document_name: String,
        risks_found: usize,
    },

    /// Input was rejected locally; nothing was sent
    ValidationFailed { message: String },

    /// The analysis or load request failed
    AnalysisFailed { message: String },

    // ─────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────
    DocumentSaved { id: DocumentId },

    SaveFailed { message: String },

    Exported { path: PathBuf },

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PhaseChanged { .. } => "phase_changed",
            Self::AnalysisStarted { .. } => "analysis_started",
            Self::AnalysisCompleted { .. } => "analysis_completed",
            Self::ValidationFailed { .. } => "validation_failed",
            Self::AnalysisFailed { .. } => "analysis_failed",
            Self::DocumentSaved { .. } => "document_saved",
            Self::SaveFailed { .. } => "save_failed",
            Self::Exported { .. } => "exported",
            Self::Shutdown => "shutdown",
        }
    }

    /// Whether this event ends a headless run with a failure
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed { .. } | Self::AnalysisFailed { .. } | Self::SaveFailed { .. }
        )
    }
}
