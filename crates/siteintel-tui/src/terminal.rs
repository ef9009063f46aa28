//! Terminal setup and restoration
//!
//! The TUI owns the terminal between [`init`] and [`restore`]. A panic in
//! between restores it too, and the panic is written to the log file since
//! stderr is unreadable while the alternate screen is active.

use std::io;

use ratatui::DefaultTerminal;
use siteintel_core::prelude::*;

/// Enter raw mode and the alternate screen
pub fn init() -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init().map_err(init_failed)?;
    install_panic_hook();
    Ok(terminal)
}

/// Leave the alternate screen and raw mode
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        warn!("Failed to restore terminal: {}", e);
    }
}

fn init_failed(err: io::Error) -> Error {
    Error::TerminalInit(err.to_string())
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        error!("siteintel panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
