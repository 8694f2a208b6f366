//! Headless mode runner - one analysis, no TUI

use std::fmt;
use std::path::PathBuf;

use tokio::sync::broadcast;

use lexguard_app::{message::Message, Engine, EngineEvent};
use lexguard_client::AnalysisService;
use lexguard_core::prelude::*;
use lexguard_core::DocumentId;

use super::HeadlessEvent;

/// What to analyze
#[derive(Debug, Clone)]
pub enum Source {
    File(PathBuf),
    Text(String),
    Document(DocumentId),
}

impl Source {
    fn into_message(self) -> Message {
        match self {
            Source::File(path) => Message::SubmitFile(path),
            Source::Text(text) => Message::SubmitText(text),
            Source::Document(id) => Message::LoadDocument(id),
        }
    }
}

/// Names the source without its content, for logs
impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "file {}", path.display()),
            Source::Text(text) => write!(f, "text ({} chars)", text.chars().count()),
            Source::Document(id) => write!(f, "document {}", id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessRequest {
    pub source: Source,
    /// Write the edited text to the export directory after a success
    pub export: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Succeeded,
    Failed,
}

impl HeadlessOutcome {
    pub fn is_success(self) -> bool {
        self == HeadlessOutcome::Succeeded
    }
}

/// Run one request through `engine` and report progress as NDJSON.
pub async fn run_headless<S>(mut engine: Engine<S>, request: HeadlessRequest) -> Result<HeadlessOutcome>
where
    S: AnalysisService + Sync + 'static,
{
    info!("LexGuard starting in headless mode: {}", request.source);

    let mut events = engine.subscribe();
    engine.process_message(request.source.into_message());

    let outcome = headless_event_loop(&mut engine, &mut events, request.export).await;

    engine.shutdown().await;
    info!("LexGuard headless mode exiting: {:?}", outcome);
    Ok(outcome)
}

async fn headless_event_loop<S>(
    engine: &mut Engine<S>,
    events: &mut broadcast::Receiver<EngineEvent>,
    export: bool,
) -> HeadlessOutcome
where
    S: AnalysisService + Sync + 'static,
{
    loop {
        while let Some(event) = next_event(events) {
            if let Some(outcome) = handle_event(engine, event, export) {
                return outcome;
            }
        }

        if engine.should_quit() {
            HeadlessEvent::error("Interrupted").emit();
            return HeadlessOutcome::Failed;
        }

        match engine.msg_rx.recv().await {
            Some(Message::ExportFailed { message }) => {
                HeadlessEvent::error(message).emit();
                return HeadlessOutcome::Failed;
            }
            Some(msg) => engine.process_message(msg),
            None => {
                info!("Message channel closed");
                return HeadlessOutcome::Failed;
            }
        }
    }
}

fn next_event(events: &mut broadcast::Receiver<EngineEvent>) -> Option<EngineEvent> {
    loop {
        match events.try_recv() {
            Ok(event) => return Some(event),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Headless event stream lagged by {} events", n);
            }
            Err(_) => return None,
        }
    }
}

/// Emit the NDJSON line for `event`; `Some` ends the run
fn handle_event<S>(
    engine: &mut Engine<S>,
    event: EngineEvent,
    export: bool,
) -> Option<HeadlessOutcome>
where
    S: AnalysisService + Sync + 'static,
{
    match event {
        EngineEvent::AnalysisStarted { generation } => {
            HeadlessEvent::analysis_started(generation).emit();
            None
        }
        EngineEvent::AnalysisCompleted {
            document_id,
            document_name,
            risks_found,
        } => {
            HeadlessEvent::analysis_completed(
                document_id,
                document_name,
                risks_found,
                engine.state.results_view(),
            )
            .emit();
            if !export {
                return Some(HeadlessOutcome::Succeeded);
            }
            engine.process_message(Message::Export);
            None
        }
        EngineEvent::ValidationFailed { message } => {
            HeadlessEvent::validation_failed(message).emit();
            Some(HeadlessOutcome::Failed)
        }
        EngineEvent::AnalysisFailed { message } => {
            HeadlessEvent::analysis_failed(message).emit();
            Some(HeadlessOutcome::Failed)
        }
        EngineEvent::Exported { path } => {
            HeadlessEvent::exported(&path).emit();
            Some(HeadlessOutcome::Succeeded)
        }
        _ => None,
    }
}
