//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here reads or writes engine
//! state, so the outcome can always be recomputed from the board alone.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, check_winner, winning_line};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Derives the outcome of a board.
///
/// Win-lines are scanned in [`WIN_LINES`] order and the first complete one
/// decides the winner. A full board with no complete line is a draw.
#[instrument(skip(board))]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Won(mark)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
