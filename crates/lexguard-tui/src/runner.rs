//! TUI runner - terminal lifecycle and event loop

use lexguard_app::message::Message;
use lexguard_app::Engine;
use lexguard_client::AnalysisService;
use lexguard_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI around `engine` until the user quits.
///
/// `initial` is processed before the first frame (e.g. loading a stored
/// document given on the command line).
pub async fn run<S>(mut engine: Engine<S>, initial: Option<Message>) -> Result<()>
where
    S: AnalysisService + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        warn!("Bracketed paste unavailable: {}", e);
    }

    if let Some(message) = initial {
        engine.process_message(message);
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;

    terminal::disable_paste();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: AnalysisService + Sync + 'static,
{
    while !engine.should_quit() {
        // Replies from background requests and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("TUI loop finished");
    Ok(())
}
