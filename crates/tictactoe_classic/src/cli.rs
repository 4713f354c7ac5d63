//! Command-line interface for tictactoe_classic.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe Classic - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_classic")]
#[command(about = "Classic two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe_classic.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a sequence of moves and print the resulting board
    Replay {
        /// Moves as indices 0-8 or labels such as `center` or `top-left`
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Returns the command to run, falling back to `play`.
    pub fn command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Play)
    }
}
