//! Terminal front end for rewindable tic-tac-toe.
//!
//! The game is drawn on the terminal's alternate screen and played with the
//! mouse: click a square to place a mark, click an entry in the move list to
//! rewind to it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod logging;
mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use logging::init_tracing;

use anyhow::{Context, Result};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use terminal::{TerminalGuard, install_panic_hook};
use tracing::{error, info};

/// Takes over the terminal, plays until the user quits, then restores it.
///
/// The terminal is restored on every exit: normal quit, setup or loop
/// errors, and panics.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    install_panic_hook();
    let _guard = TerminalGuard::enter().context("Failed to take over terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config.title().as_str());
    let res = app.run(&mut terminal);

    if let Err(err) = &res {
        error!(error = %err, "Game loop error");
    }
    res.context("Game loop failed")
}
