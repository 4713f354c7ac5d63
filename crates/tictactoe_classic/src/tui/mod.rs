//! Terminal UI for Tic Tac Toe Classic.

mod app;
mod input;
pub mod ui;

pub use app::App;

use crate::config::TuiConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};
use ui::{ScreenLayout, Target};

/// Restores the terminal on drop, so early returns and panics leave the
/// shell usable.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            restore: restore_terminal,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(err) = (self.restore)() {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Tic Tac Toe Classic TUI");

    enable_raw_mode()?;
    let _guard = TerminalGuard::new();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if *config.mouse() {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.show_help());
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Blocking event loop: one input event is handled to completion before
/// the next is read.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut area = Rect::default();

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| {
                area = frame.area();
                ui::draw(frame, app);
            })?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let target = ScreenLayout::new(area).hit_test(mouse.column, mouse.row);
                debug!(column = mouse.column, row = mouse.row, ?target, "Click");
                match target {
                    Some(Target::Cell(position)) => app.place(position),
                    Some(Target::Reset) => app.reset(),
                    None => {}
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                app.request_redraw();
            }
            _ => {}
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
