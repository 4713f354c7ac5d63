//! Move rejection reasons.

use crate::outcome::Outcome;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not in 0-8.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game is already won or drawn.
    #[display("Game is already over ({:?})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}
