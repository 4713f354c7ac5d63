//! Owned-state game engine.
//!
//! [`GameEngine`] holds the board and the mark due to move. The outcome is
//! never stored: every read recomputes it from the board. Front ends call
//! [`GameEngine::apply_move`] for each click and [`GameEngine::reset`] for
//! the reset control, and learn about changes through
//! [`GameEngine::subscribe`].

use crate::error::MoveError;
use crate::outcome::{Outcome, status_message};
use crate::position::Position;
use crate::rules::compute_outcome;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Copy of the observable engine state, handed to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Mark due to move next.
    pub turn: Mark,
    /// Outcome derived from `board`.
    pub outcome: Outcome,
}

impl GameSnapshot {
    /// Status line for this snapshot.
    pub fn status_message(&self) -> String {
        status_message(self.outcome, self.turn)
    }
}

/// Callback invoked after every accepted move and every reset.
pub type Listener = Box<dyn FnMut(&GameSnapshot)>;

/// Tic-tac-toe engine.
pub struct GameEngine {
    board: Board,
    turn: Mark,
    listeners: Vec<Listener>,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            listeners: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the 9 cells.
    pub fn cells(&self) -> [Cell; 9] {
        *self.board.cells()
    }

    /// Returns the mark due to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Derives the outcome from the current board.
    pub fn outcome(&self) -> Outcome {
        compute_outcome(&self.board)
    }

    /// Human-readable status: winner, draw, or the next mark to move.
    pub fn status_message(&self) -> String {
        status_message(self.outcome(), self.turn)
    }

    /// Returns a copy of the observable state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            turn: self.turn,
            outcome: self.outcome(),
        }
    }

    /// Registers a callback that runs after every state change.
    ///
    /// Listeners run in registration order. Rejected moves do not notify.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
        debug!(listeners = self.listeners.len(), "Listener subscribed");
    }

    /// Places the current mark at `index`, ignoring invalid moves.
    ///
    /// Out-of-range indices, occupied cells and moves after the game is
    /// over leave the engine untouched.
    pub fn apply_move(&mut self, index: usize) {
        if let Err(error) = self.try_move(index) {
            debug!(%error, index, "Move ignored");
        }
    }

    /// Places the current mark at a named position, ignoring invalid moves.
    pub fn apply_position(&mut self, position: Position) {
        self.apply_move(position.to_index());
    }

    /// Places the current mark at `index`.
    ///
    /// On success returns the outcome after the move. The turn passes to
    /// the other mark only while the game stays in progress.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] and leaves the engine untouched if `index` is
    /// not 0-8, the game is over, or the cell is occupied.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn try_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        if index >= Board::SIZE {
            return Err(MoveError::OutOfRange(index));
        }

        let before = self.outcome();
        if before.is_terminal() {
            return Err(MoveError::GameOver(before));
        }

        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(index));
        }

        self.board.set(index, Cell::Occupied(self.turn));

        let after = self.outcome();
        if after.is_terminal() {
            info!(winner = ?after.winner(), "Game over");
        } else {
            self.turn = self.turn.opponent();
        }
        debug!(?after, next = %self.turn, "Move applied");

        self.notify();
        Ok(after)
    }

    /// Clears the board and gives the first move to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        info!("Game reset");
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_move_toggles_turn() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.try_move(4), Ok(Outcome::InProgress));
        assert_eq!(engine.board().get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_rejections() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.try_move(9), Err(MoveError::OutOfRange(9)));
        engine.apply_move(0);
        assert_eq!(engine.try_move(0), Err(MoveError::CellOccupied(0)));
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_turn_kept_on_winning_move() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4] {
            engine.apply_move(index);
        }
        assert_eq!(engine.try_move(2), Ok(Outcome::Won(Mark::X)));
        assert_eq!(engine.turn(), Mark::X);
        assert_eq!(
            engine.try_move(8),
            Err(MoveError::GameOver(Outcome::Won(Mark::X)))
        );
        assert_eq!(crate::rules::winning_line(engine.board()), Some([0, 1, 2]));
    }

    #[test]
    fn test_listeners_see_accepted_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut engine = GameEngine::new();
        let sink = Rc::clone(&seen);
        engine.subscribe(move |snapshot| sink.borrow_mut().push(*snapshot));

        engine.apply_move(4);
        engine.apply_move(4);
        engine.apply_move(42);
        engine.reset();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].turn, Mark::O);
        assert_eq!(seen[0].status_message(), "Next player: O");
        assert_eq!(seen[1].board, Board::new());
        assert_eq!(seen[1].turn, Mark::X);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut engine = GameEngine::new();
        for tag in 0..3 {
            let sink = Rc::clone(&order);
            engine.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        engine.apply_move(0);
        engine.apply_move(0);
        engine.reset();

        assert_eq!(*order.borrow(), vec![0, 1, 2, 0, 1, 2]);
    }
}
