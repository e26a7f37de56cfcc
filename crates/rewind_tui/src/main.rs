//! Rewind - tic-tac-toe with time travel, in the terminal.

use anyhow::Result;
use clap::Parser;
use rewind_tui::{AppConfig, Cli, init_tracing, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(&config)?;
    info!(log_file = %config.log_file().display(), "Configuration ready");

    run_tui(&config)
}
