//! Tracing setup.

use crate::AppConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Sends logs to the configured file so they never draw over the UI.
///
/// `RUST_LOG` wins over the configured filter. Initialising twice is harmless.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
