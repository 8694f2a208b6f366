//! Engine - shared orchestration state for the TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the shutdown signal
//! and the analysis service, and broadcasts [`EngineEvent`]s derived from
//! state changes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use lexguard_client::AnalysisService;
use lexguard_core::prelude::*;
use lexguard_core::AnalysisPhase;
use tokio::sync::{broadcast, mpsc, watch};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, NoticeKind};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    phase: AnalysisPhase,
    generation: u64,
    input_error: Option<String>,
    saving: bool,
    notice: Option<(NoticeKind, String, Instant)>,
    export_count: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase(),
            generation: state.workflow.generation(),
            input_error: state.input_error.clone(),
            saving: state.saving,
            notice: state
                .notice
                .as_ref()
                .map(|n| (n.kind, n.text.clone(), n.expires_at)),
            export_count: state.export_count,
        }
    }
}

/// Orchestration engine for LexGuard.
///
/// Shared between the TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Shutdown signaling
/// - Analysis service handle
/// - Event broadcasting for external consumers
pub struct Engine<S> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Sender for the shutdown signal. Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Loaded settings
    pub settings: Settings,

    service: Arc<S>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<S> Engine<S>
where
    S: AnalysisService + Sync + 'static,
{
    /// Create an Engine around an analysis service.
    ///
    /// Must be called inside a tokio runtime: the OS signal handler is
    /// spawned here.
    pub fn new(settings: Settings, service: S) -> Self {
        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            settings,
            service: Arc::new(service),
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped and the receiver reports `RecvError::Lagged`.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for what changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.msg_tx,
            &self.service,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        if pre != post {
            self.emit_events(&pre, &post);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Signal background requests to stop and notify subscribers.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if post.input_error != pre.input_error {
            if let Some(message) = &post.input_error {
                self.emit(EngineEvent::ValidationFailed {
                    message: message.clone(),
                });
            }
        }

        if pre.phase != post.phase {
            self.emit(EngineEvent::PhaseChanged {
                old_phase: pre.phase,
                new_phase: post.phase,
            });
        }

        let new_request = post.generation != pre.generation;
        if post.phase == AnalysisPhase::Loading && (new_request || pre.phase != post.phase) {
            self.emit(EngineEvent::AnalysisStarted {
                generation: post.generation,
            });
        }

        if post.phase == AnalysisPhase::Ready && pre.phase != AnalysisPhase::Ready {
            if let Some(doc) = self.state.workflow.document() {
                self.emit(EngineEvent::AnalysisCompleted {
                    document_id: doc.id,
                    document_name: doc.name.clone(),
                    risks_found: doc.risks_found(),
                });
            }
        }

        if post.phase == AnalysisPhase::Error && pre.phase != AnalysisPhase::Error {
            if let Some(message) = self.state.workflow.error_message() {
                self.emit(EngineEvent::AnalysisFailed {
                    message: message.to_string(),
                });
            }
        }

        // A save reply clears `saving`; stale replies leave the notice alone
        if pre.saving && !post.saving && pre.notice != post.notice {
            match &post.notice {
                Some((NoticeKind::Success, _, _)) => {
                    if let Some(id) = self.state.workflow.document().and_then(|d| d.id) {
                        self.emit(EngineEvent::DocumentSaved { id });
                    }
                }
                Some((NoticeKind::Error, message, _)) => {
                    self.emit(EngineEvent::SaveFailed {
                        message: message.clone(),
                    });
                }
                _ => {}
            }
        }

        if post.export_count > pre.export_count {
            let path = self
                .state
                .last_export
                .clone()
                .unwrap_or_else(PathBuf::new);
            self.emit(EngineEvent::Exported { path });
        }
    }

    /// send() returns Err only if there are no receivers
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
