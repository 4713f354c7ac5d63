//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// Moves the cursor one cell for arrow keys (or `h`/`j`/`k`/`l`).
///
/// The cursor stops at the board edges; other keys leave it in place.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        _ => return cursor,
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to board positions.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Position::from_index(digit - 1)
        }
        _ => None,
    }
}
