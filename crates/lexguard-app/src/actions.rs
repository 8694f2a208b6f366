//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every remote call runs in its own task and reports back with exactly one
//! message. Tasks are abandoned when the shutdown signal fires.

use std::future::Future;
use std::sync::Arc;

use lexguard_client::AnalysisService;
use lexguard_core::prelude::*;
use tokio::sync::{mpsc, watch};

use crate::export::export_text;
use crate::message::Message;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
    shutdown_rx: watch::Receiver<bool>,
) where
    S: AnalysisService + Sync + 'static,
{
    match action {
        UpdateAction::AnalyzeDocument { generation, upload } => {
            info!(
                "Uploading {} ({} bytes, {})",
                upload.file_name,
                upload.size(),
                upload.media_type.mime()
            );
            let file_name = upload.file_name.clone();
            spawn_request(msg_tx, shutdown_rx, async move {
                match service.analyze_document(upload).await {
                    Ok(result) => Message::AnalysisCompleted {
                        generation,
                        result: Box::new(result),
                        submitted_text: None,
                        file_name: Some(file_name),
                    },
                    Err(e) => Message::AnalysisFailed {
                        generation,
                        message: e.user_message(),
                    },
                }
            });
        }

        UpdateAction::AnalyzeText { generation, text } => {
            info!("Submitting {} characters for analysis", text.chars().count());
            spawn_request(msg_tx, shutdown_rx, async move {
                match service.analyze_text(text.clone()).await {
                    Ok(result) => Message::AnalysisCompleted {
                        generation,
                        result: Box::new(result),
                        submitted_text: Some(text),
                        file_name: None,
                    },
                    Err(e) => Message::AnalysisFailed {
                        generation,
                        message: e.user_message(),
                    },
                }
            });
        }

        UpdateAction::LoadDocument { generation, id } => {
            spawn_request(msg_tx, shutdown_rx, async move {
                match service.get_document(id).await {
                    Ok(record) => Message::DocumentLoaded {
                        generation,
                        id,
                        record: Box::new(record),
                    },
                    Err(e) => Message::DocumentLoadFailed {
                        generation,
                        id,
                        message: e.user_message(),
                    },
                }
            });
        }

        UpdateAction::SaveDocument {
            generation,
            id,
            text,
        } => {
            spawn_request(msg_tx, shutdown_rx, async move {
                match service.update_document(id, text.clone()).await {
                    Ok(_) => Message::DocumentSaved {
                        generation,
                        id,
                        text,
                    },
                    Err(e) => Message::SaveFailed {
                        generation,
                        message: e.user_message(),
                    },
                }
            });
        }

        UpdateAction::ExportDocument { directory, text } => {
            spawn_request(msg_tx, shutdown_rx, async move {
                match export_text(&directory, &text).await {
                    Ok(path) => Message::Exported { path },
                    Err(e) => Message::ExportFailed {
                        message: e.user_message(),
                    },
                }
            });
        }

        UpdateAction::ListDocuments => {
            spawn_request(msg_tx, shutdown_rx, async move {
                match service.list_documents().await {
                    Ok(documents) => Message::DocumentsListed { documents },
                    Err(e) => Message::DocumentListFailed {
                        message: e.user_message(),
                    },
                }
            });
        }
    }
}

/// Run `request` in the background and forward its reply
fn spawn_request<F>(msg_tx: mpsc::Sender<Message>, mut shutdown_rx: watch::Receiver<bool>, request: F)
where
    F: Future<Output = Message> + Send + 'static,
{
    tokio::spawn(async move {
        tokio::select! {
            msg = request => {
                if msg_tx.send(msg).await.is_err() {
                    debug!("Message channel closed before reply was delivered");
                }
            }
            _ = shutdown_rx.changed() => {
                debug!("Request abandoned on shutdown");
            }
        }
    });
}
