//! Message processing through the TEA update loop

use std::sync::Arc;

use lexguard_client::AnalysisService;
use tokio::sync::{mpsc, watch};

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and its follow-ups, dispatching every resulting action
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
    shutdown_rx: &watch::Receiver<bool>,
) where
    S: AnalysisService + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service.clone(), shutdown_rx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
