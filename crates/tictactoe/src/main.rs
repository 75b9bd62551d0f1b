//! Tic-tac-toe binary.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, GameConfig, LogConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    init_logging(config.log())?;
    info!(?config, "Configuration resolved");

    tictactoe::run(&config).await
}

/// Logs to a file so output does not interfere with the TUI.
fn init_logging(log: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(log.file())
        .with_context(|| format!("Failed to create log file {}", log.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
