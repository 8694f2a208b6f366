//! Headless mode - NDJSON event output without a terminal UI
//!
//! Runs one analysis (file, text or stored document) through the same
//! engine as the TUI and prints one JSON object per line to stdout.
//!
//! # Example Output
//!
//! ```json
//! {"event":"analysis_started","generation":1,"timestamp":1704700001000}
//! {"event":"analysis_completed","document_id":7,"document_name":"lease.pdf","risks_found":1,"summary":"...","risks":[...],"timestamp":1704700002000}
//! {"event":"exported","path":"./edited-document.txt","timestamp":1704700002010}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use lexguard_app::presenter::{ResultsView, RiskCard};
use lexguard_core::DocumentId;
use serde::Serialize;
use tracing::error;

pub use runner::{run_headless, HeadlessOutcome, HeadlessRequest, Source};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A request was sent to the analysis service
    AnalysisStarted { generation: u64, timestamp: i64 },

    /// The document is ready; risks are in display order
    AnalysisCompleted {
        document_id: Option<u64>,
        document_name: String,
        risks_found: usize,
        summary: Option<String>,
        risks: Vec<RiskCard>,
        timestamp: i64,
    },

    /// Input rejected before anything was sent
    ValidationFailed { message: String, timestamp: i64 },

    /// The service could not analyze or load the document
    AnalysisFailed { message: String, timestamp: i64 },

    /// Edited text written to disk
    Exported { path: String, timestamp: i64 },

    /// Any other error that ends the run
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn analysis_started(generation: u64) -> Self {
        Self::AnalysisStarted {
            generation,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_completed(
        document_id: Option<DocumentId>,
        document_name: String,
        risks_found: usize,
        view: Option<ResultsView>,
    ) -> Self {
        let (summary, risks) = match view {
            Some(view) => {
                let summary = view.summary_available.then(|| view.summary.clone());
                (summary, view.cards().to_vec())
            }
            None => (None, Vec::new()),
        };
        Self::AnalysisCompleted {
            document_id: document_id.map(|id| id.0),
            document_name,
            risks_found,
            summary,
            risks,
            timestamp: Self::now(),
        }
    }

    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self::AnalysisFailed {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    pub fn exported(path: &std::path::Path) -> Self {
        Self::Exported {
            path: path.display().to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: Self::now(),
        }
    }
}
