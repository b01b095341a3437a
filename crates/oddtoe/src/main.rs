//! oddtoe - local two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use oddtoe::AppConfig;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Log to a file so output does not fight the terminal UI
    let log_path = std::env::var("ODDTOE_LOG").unwrap_or_else(|_| "oddtoe.log".to_string());
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(config = %cli.config.display(), "Starting oddtoe");

    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(
        cli.size,
        cli.player_x,
        cli.player_o,
    );

    oddtoe::tui::run(config)
}
