//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc::{self, Receiver};
use tictactoe_engine::{GameEngine, GameSnapshot, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The engine reports every change through a subscribed listener; the app
/// keeps the latest snapshot it received and renders from that.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    changes: Receiver<GameSnapshot>,
    snapshot: GameSnapshot,
    cursor: Position,
    show_help: bool,
    needs_redraw: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(show_help: bool) -> Self {
        let mut engine = GameEngine::new();
        let (tx, changes) = mpsc::channel();
        engine.subscribe(move |snapshot| {
            // Receiver lives as long as the app; a failed send means shutdown.
            let _ = tx.send(*snapshot);
        });
        let snapshot = engine.snapshot();

        Self {
            engine,
            changes,
            snapshot,
            cursor: Position::Center,
            show_help,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Latest state reported by the engine.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the key help line is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Forces a redraw on the next frame (e.g. after a resize).
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Pulls pending engine changes and reports whether to redraw.
    pub fn take_redraw(&mut self) -> bool {
        for snapshot in self.changes.try_iter() {
            self.snapshot = snapshot;
            self.needs_redraw = true;
        }
        std::mem::take(&mut self.needs_redraw)
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!(?key, "Key pressed");
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            code => {
                if let Some(position) = digit_position(code) {
                    self.place(position);
                } else {
                    let cursor = move_cursor(self.cursor, code);
                    if cursor != self.cursor {
                        self.cursor = cursor;
                        self.needs_redraw = true;
                    }
                }
            }
        }
    }

    /// Places the current mark at `position` and moves the cursor there.
    ///
    /// Invalid moves are ignored by the engine.
    pub fn place(&mut self, position: Position) {
        if self.cursor != position {
            self.cursor = position;
            self.needs_redraw = true;
        }
        self.engine.apply_position(position);
    }

    /// Starts a new game.
    pub fn reset(&mut self) {
        info!("Reset requested");
        self.engine.reset();
    }
}
