//! Command-line interface for oddtoe.

use clap::Parser;
use oddtoe_rules::BoardSize;
use std::path::PathBuf;

/// oddtoe - tic-tac-toe on any odd-sized board
#[derive(Parser, Debug)]
#[command(name = "oddtoe")]
#[command(about = "Two-player tic-tac-toe on odd-sized boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the config file. Missing files fall back to defaults.
    #[arg(long, default_value = "oddtoe.toml")]
    pub config: PathBuf,

    /// Board size for the first round (odd, at least 3)
    #[arg(short, long)]
    pub size: Option<BoardSize>,

    /// Name for the X player
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for the O player
    #[arg(long)]
    pub player_o: Option<String>,
}
