//! tictacduel - tic-tac-toe in the terminal.
//!
//! Play against a friend on one keyboard or against a computer opponent
//! that wins when it can, blocks when it must, and otherwise takes the
//! center or a random cell.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use std::sync::Arc;
use tictacduel_engine::GameEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_logging(&config)?;

    let mode = cli.mode.or(*config.default_mode());
    info!(?mode, config = %cli.config.display(), "Starting tictacduel");

    tui::run(tui::App::new(GameEngine::default(), mode))
}

/// Sends logs to the configured file so they don't interfere with the UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
