//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a clickable move history.
#[derive(Debug, Parser)]
#[command(name = "rewind", version, about)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["rewind"]).expect("parses");
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_config_and_log_file() {
        let cli = Cli::try_parse_from(["rewind", "-c", "game.toml", "--log-file", "out.log"])
            .expect("parses");
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    }
}
