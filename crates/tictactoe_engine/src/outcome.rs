//! Derived game outcome and the status line shown to players.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a board. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A mark completed a win-line.
    Won(Mark),
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Human-readable status for an outcome and the mark due to move next.
///
/// `turn` is only consulted while the game is in progress.
pub fn status_message(outcome: Outcome, turn: Mark) -> String {
    match outcome {
        Outcome::Won(mark) => format!("Winner: {mark}"),
        Outcome::Draw => "Game ended in a draw!".to_string(),
        Outcome::InProgress => format!("Next player: {turn}"),
    }
}
