//! Stateless UI rendering and mouse hit-testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Cell, Mark, Position, rules::winning_line};

use super::app::App;

/// Window title shown above the status line.
pub const TITLE: &str = "Tic Tac Toe Classic";
/// Label of the clickable reset control.
pub const RESET_LABEL: &str = "[ Reset Game ]";
const HELP: &str = "arrows move · enter/space place · 1-9 place · r reset · q quit";

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The reset control.
    Reset,
}

/// Screen regions for a terminal area. Shared by drawing and hit-testing so
/// clicks map to exactly what was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title row.
    pub title: Rect,
    /// Status line box.
    pub status: Rect,
    /// Region the board is centered in.
    pub board: Rect,
    /// Row holding the reset control.
    pub reset: Rect,
    /// Key help row.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into screen regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),            // Title
                Constraint::Length(3),            // Status
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(2),            // Reset
                Constraint::Length(1),            // Help
            ])
            .split(area);

        Self {
            title: chunks[0],
            status: chunks[1],
            board: chunks[2],
            reset: chunks[3],
            help: chunks[4],
        }
    }

    /// Screen rectangle of a board cell.
    pub fn cell_rect(&self, position: Position) -> Rect {
        let origin = center_rect(self.board, BOARD_WIDTH, BOARD_HEIGHT);
        let x = origin.x + position.col() as u16 * (CELL_WIDTH + GAP);
        let y = origin.y + position.row() as u16 * (CELL_HEIGHT + GAP);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(self.board)
    }

    /// Screen rectangle of the reset control.
    pub fn reset_button(&self) -> Rect {
        center_rect(self.reset, RESET_LABEL.chars().count() as u16, 1)
    }

    /// Resolves a click at (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(position) = Position::ALL
            .into_iter()
            .find(|&p| contains(self.cell_rect(p), column, row))
        {
            return Some(Target::Cell(position));
        }
        contains(self.reset_button(), column, row).then_some(Target::Reset)
    }
}

/// Renders the whole screen for the app's latest snapshot.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let snapshot = app.snapshot();

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(snapshot.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let highlight = winning_line(&snapshot.board);
    for position in Position::ALL {
        let cell = snapshot.board.get(position.to_index()).unwrap_or_default();
        let winning = highlight.is_some_and(|line| line.contains(&position.to_index()));
        draw_cell(
            frame,
            layout.cell_rect(position),
            cell,
            position == app.cursor(),
            winning,
        );
    }

    let reset = Paragraph::new(RESET_LABEL)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(reset, layout.reset_button());

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool, winning: bool) {
    let (symbol, mut style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::Occupied(Mark::O) => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };
    if winning {
        style = style.fg(Color::Green);
    }

    let border = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 60, 24))
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for a in Position::ALL {
            let rect = layout.cell_rect(a);
            assert_eq!((rect.width, rect.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in Position::ALL {
                if a != b {
                    assert!(!rect.intersects(layout.cell_rect(b)), "{a} overlaps {b}");
                }
            }
        }
    }

    #[test]
    fn test_hit_test_every_cell() {
        let layout = layout();
        for position in Position::ALL {
            let rect = layout.cell_rect(position);
            assert_eq!(
                layout.hit_test(rect.x + 1, rect.y + 1),
                Some(Target::Cell(position))
            );
        }
    }

    #[test]
    fn test_hit_test_reset_and_miss() {
        let layout = layout();
        let button = layout.reset_button();
        assert_eq!(layout.hit_test(button.x, button.y), Some(Target::Reset));
        assert_eq!(layout.hit_test(0, 0), None);
    }

    #[test]
    fn test_row_major_placement() {
        let layout = layout();
        let top_left = layout.cell_rect(Position::TopLeft);
        let top_right = layout.cell_rect(Position::TopRight);
        let bottom_left = layout.cell_rect(Position::BottomLeft);
        assert_eq!(top_left.y, top_right.y);
        assert!(top_right.x > top_left.x);
        assert_eq!(top_left.x, bottom_left.x);
        assert!(bottom_left.y > top_left.y);
    }
}
