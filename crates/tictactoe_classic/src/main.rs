//! Tic Tac Toe Classic - CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_classic::{Cli, Command, TuiConfig, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command() {
        Command::Play => {
            logging::init_file(config.log_file(), config.log_filter())?;
            info!(log_file = %config.log_file().display(), "Logging to file");
            tui::run(&config)
        }
        Command::Replay { moves, json } => {
            logging::init_stderr(config.log_filter())?;
            replay::run(moves, *json)
        }
    }
}
