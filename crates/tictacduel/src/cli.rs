//! Command-line interface for tictacduel.

use clap::Parser;
use std::path::PathBuf;
use tictacduel_engine::GameMode;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictacduel")]
#[command(about = "Terminal tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start straight in a mode (pvp or pvc) instead of the mode menu
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Path to the configuration file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "tictacduel.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        let cli = Cli::parse_from(["tictacduel", "--mode", "pvc"]);
        assert_eq!(cli.mode, Some(GameMode::PvC));
        assert_eq!(cli.config, PathBuf::from("tictacduel.toml"));
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_reject_unknown_mode() {
        assert!(Cli::try_parse_from(["tictacduel", "--mode", "online"]).is_err());
    }
}
