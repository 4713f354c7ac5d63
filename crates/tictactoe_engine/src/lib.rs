//! Classic tic-tac-toe game logic.
//!
//! A 3x3 board, alternating turns with X first, win and draw detection
//! over eight fixed win-lines, and a reset. No rendering: a front end owns
//! a [`GameEngine`], forwards clicks to [`GameEngine::apply_move`], and
//! re-renders from [`GameEngine::cells`] and
//! [`GameEngine::status_message`] whenever a subscribed listener fires.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(engine.outcome(), Outcome::Won(Mark::X));
//! assert_eq!(engine.status_message(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, GameSnapshot, Listener};
pub use error::MoveError;
pub use outcome::{Outcome, status_message};
pub use position::Position;
pub use rules::{WIN_LINES, compute_outcome};
pub use types::{Board, Cell, Mark};
