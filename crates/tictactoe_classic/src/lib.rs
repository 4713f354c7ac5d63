//! Tic Tac Toe Classic - terminal front end
//!
//! Renders a [`tictactoe_engine::GameEngine`] in the terminal and forwards
//! key presses and mouse clicks to it. The engine notifies the UI of every
//! change through a subscribed listener; the UI redraws only then.
//!
//! # Architecture
//!
//! - **tui**: ratatui screen, input handling and click hit-testing
//! - **replay**: headless command that applies a move list and prints the result
//! - **config**: TOML settings for logging and input
//! - **cli**: clap command-line parsing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};
