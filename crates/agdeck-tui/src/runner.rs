//! Main TUI runner - entry point and event loop

use std::time::Duration;

use agdeck_app::{Engine, EngineOptions};
use agdeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run(options: EngineOptions) -> Result<()> {
    terminal::install_panic_hook();

    let mut engine = Engine::new(options);
    let tick_rate = Duration::from_millis(engine.settings.ui.tick_rate_ms.max(1));
    info!(
        "Agency Deck starting: view={:?} tick={}ms",
        engine.state.view(),
        tick_rate.as_millis()
    );

    let mut term = ratatui::init();
    let result = run_loop(&mut term, &mut engine, tick_rate);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("TUI loop ended with error: {}", e);
    }
    result
}

/// Main event loop
///
/// Blocks on terminal input for at most one tick, so timer, reply and
/// watcher messages are picked up at least once per tick.
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine,
    tick_rate: Duration,
) -> Result<()> {
    while !engine.should_quit() {
        // Background completions first so the frame shows them
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
