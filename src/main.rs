//! Tac Toe - two-player tic-tac-toe at a text prompt.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, SummaryFormat};
use std::io::Write;
use tac_toe::{GameConfig, GameEngine};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    initialize_tracing(&config)?;

    run_game(config, cli.summary)
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)?;

    if cli.announce_draw {
        config = config.with_announce_draw(true);
    }
    if cli.hide_open_cells {
        config = config.with_show_open_cells(false);
    }
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level.clone());
    }

    Ok(config)
}

/// Logs go to stderr or the configured file so they never mix with the board.
fn initialize_tracing(config: &GameConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_file() {
        Some(path) => {
            let log_file = std::fs::File::create(path)?;
            builder
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    info!("Tracing initialized");
    Ok(())
}

/// Plays one game on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: GameConfig, summary: Option<SummaryFormat>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut engine = GameEngine::new(stdin.lock(), stdout.lock(), config)?;
    let status = engine.play_game()?;
    info!(%status, moves = engine.state().play_order().len(), "Game finished");

    if let Some(format) = summary {
        let record = engine.record();
        let (_, mut out) = engine.into_parts();
        match format {
            SummaryFormat::Text => writeln!(out, "{}", record.to_text())?,
            SummaryFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?,
        }
    }

    Ok(())
}
