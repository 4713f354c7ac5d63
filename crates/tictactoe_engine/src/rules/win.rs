//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight win-lines, in evaluation order: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first win-line whose three cells hold the same mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark fills a win-line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.cells()[a].mark())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in cells {
            board.set(index, Cell::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_every_line() {
        for line in WIN_LINES {
            let board = board_with(&line.map(|i| (i, Mark::O)));
            assert_eq!(check_winner(&board), Some(Mark::O), "line {line:?}");
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[(2, Mark::X), (4, Mark::O), (6, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable in play, but the scan order is fixed.
        let board = board_with(&[
            (0, Mark::O),
            (1, Mark::O),
            (2, Mark::O),
            (6, Mark::X),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }
}
