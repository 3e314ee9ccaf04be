//! Command-line interface for tac_toe.

use clap::{Parser, ValueEnum};

/// Tac Toe - two-player tic-tac-toe at a text prompt
#[derive(Parser, Debug)]
#[command(name = "tac_toe")]
#[command(about = "Two-player tic-tac-toe played at a text prompt", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tac_toe.toml")]
    pub config: std::path::PathBuf,

    /// Print "Draw" when the board fills without a winner
    #[arg(long)]
    pub announce_draw: bool,

    /// Don't list the open cells before each prompt
    #[arg(long)]
    pub hide_open_cells: bool,

    /// Log filter used when RUST_LOG is unset (overrides the config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print a summary of the game when it ends
    #[arg(long, value_enum)]
    pub summary: Option<SummaryFormat>,
}

/// How to print the end-of-game summary.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    /// One line per move, then the outcome
    Text,
    /// The game record as JSON
    Json,
}
