//! Main TUI runner - entry point and event loop
//!
//! Creates the Engine, owns the terminal, and alternates between draining
//! request completions, drawing, and polling for key presses.

use siteintel_app::config::Settings;
use siteintel_app::{ApiBackend, Engine};
use siteintel_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI against the given backend until the user quits
pub async fn run(settings: Settings, backend: ApiBackend) -> Result<()> {
    let mut term = terminal::init()?;
    let mut engine = Engine::new(settings, backend);
    info!("TUI started");

    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("TUI stopped");
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Request completions and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
