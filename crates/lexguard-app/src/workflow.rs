//! Analysis workflow state machine
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ Ready
//!                     │
//!                     └──err──▶ Error
//! Ready / Error ──submit──▶ Loading
//! Ready / Error / Loading ──reset──▶ Idle
//! ```
//!
//! Every submission bumps `generation`. Replies carry the generation they
//! were issued under and are dropped unless it is still current, so a reset
//! or a newer submission is never overwritten by a late reply.

use lexguard_core::prelude::*;
use lexguard_core::{AnalysisPhase, InputMode, ResultTab};

use crate::document::DocumentContext;

#[derive(Debug, Clone, Default)]
pub struct Workflow {
    mode: InputMode,
    phase: AnalysisPhase,
    active_tab: ResultTab,
    selected_risk_id: Option<String>,
    error_message: Option<String>,
    generation: u64,
    document: Option<DocumentContext>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn active_tab(&self) -> ResultTab {
        self.active_tab
    }

    pub fn selected_risk_id(&self) -> Option<&str> {
        self.selected_risk_id.as_deref()
    }

    /// Present only in the `Error` phase
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Present only in the `Ready` phase
    pub fn document(&self) -> Option<&DocumentContext> {
        self.document.as_ref()
    }

    pub fn document_mut(&mut self) -> Option<&mut DocumentContext> {
        self.document.as_mut()
    }

    /// Switch input mode. Only allowed while `Idle` or `Error`.
    pub fn set_mode(&mut self, mode: InputMode) -> bool {
        if !matches!(self.phase, AnalysisPhase::Idle | AnalysisPhase::Error) {
            debug!("Ignoring mode switch while {:?}", self.phase);
            return false;
        }
        self.mode = mode;
        true
    }

    /// Enter `Loading` for a new request and return its generation.
    ///
    /// Rejected while a request is already in flight. Any previous document
    /// context is discarded immediately.
    pub fn begin(&mut self) -> Option<u64> {
        if !self.phase.accepts_submit() {
            debug!("Ignoring submit while a request is in flight");
            return None;
        }
        self.generation += 1;
        self.phase = AnalysisPhase::Loading;
        self.error_message = None;
        self.document = None;
        self.selected_risk_id = None;
        Some(self.generation)
    }

    /// Apply a successful reply. Returns false when the reply is stale.
    pub fn complete(&mut self, generation: u64, document: DocumentContext) -> bool {
        if !self.accepts_reply(generation) {
            return false;
        }
        self.phase = AnalysisPhase::Ready;
        self.active_tab = ResultTab::Summary;
        self.selected_risk_id = None;
        self.error_message = None;
        self.document = Some(document);
        true
    }

    /// Apply a failed reply. Returns false when the reply is stale.
    pub fn fail(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.accepts_reply(generation) {
            return false;
        }
        self.phase = AnalysisPhase::Error;
        self.error_message = Some(message.into());
        self.document = None;
        self.selected_risk_id = None;
        true
    }

    /// Return to `Idle`, discarding the document and any in-flight request.
    pub fn reset(&mut self) -> bool {
        if self.phase == AnalysisPhase::Idle {
            return false;
        }
        if self.phase == AnalysisPhase::Loading {
            debug!("Reset supersedes in-flight request {}", self.generation);
        }
        self.generation += 1;
        self.phase = AnalysisPhase::Idle;
        self.active_tab = ResultTab::Summary;
        self.selected_risk_id = None;
        self.error_message = None;
        self.document = None;
        true
    }

    pub fn select_tab(&mut self, tab: ResultTab) -> bool {
        if self.phase != AnalysisPhase::Ready {
            return false;
        }
        self.active_tab = tab;
        true
    }

    /// Toggle the expanded risk. Ids outside the current document are ignored.
    pub fn select_risk(&mut self, id: &str) -> bool {
        let known = self.document.as_ref().is_some_and(|d| d.has_risk(id));
        if !known {
            debug!("Ignoring selection of unknown risk {:?}", id);
            return false;
        }
        if self.selected_risk_id.as_deref() == Some(id) {
            self.selected_risk_id = None;
        } else {
            self.selected_risk_id = Some(id.to_string());
        }
        true
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    fn accepts_reply(&self, generation: u64) -> bool {
        if generation != self.generation || self.phase != AnalysisPhase::Loading {
            debug!(
                "Dropping stale reply (generation {}, current {})",
                generation, self.generation
            );
            return false;
        }
        true
    }
}
