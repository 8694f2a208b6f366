//! OS signals: SIGINT/SIGTERM (Ctrl+C on Windows) become `Message::Quit`

use std::fmt;

use lexguard_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// The signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopSignal::Interrupt => f.write_str("interrupt"),
            StopSignal::Terminate => f.write_str("terminate"),
        }
    }
}

/// Forward the first stop signal to `tx` as `Message::Quit`.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_stop_signal().await {
            Ok(signal) => {
                info!("Stopping on {} signal", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Engine gone before the {} signal was delivered", signal);
                }
            }
            Err(e) => warn!("Signals will not stop LexGuard: {}", e),
        }
    });
}

#[cfg(unix)]
async fn next_stop_signal() -> Result<StopSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    let signal = tokio::select! {
        _ = interrupt.recv() => StopSignal::Interrupt,
        _ = terminate.recv() => StopSignal::Terminate,
    };
    Ok(signal)
}

#[cfg(windows)]
async fn next_stop_signal() -> Result<StopSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok(StopSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_handler_stays_quiet_until_signalled() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        spawn_signal_handler(tx);

        let waited = tokio::time::timeout(Duration::from_millis(20), rx.recv()).await;
        assert!(waited.is_err());
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(StopSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(StopSignal::Terminate.to_string(), "terminate");
    }
}
