//! Headless move replay.

use anyhow::Result;
use tictactoe_engine::{GameEngine, GameSnapshot, Position};
use tracing::{info, instrument, warn};

/// Applies `moves` to a fresh engine and returns the final state.
///
/// Each move is an index 0-8 or a position label. Moves that do not parse
/// or that the engine rejects are skipped, the same way a click on a taken
/// cell is ignored.
#[instrument]
pub fn replay(moves: &[String]) -> GameSnapshot {
    let mut engine = GameEngine::new();
    for raw in moves {
        match Position::from_label_or_number(raw) {
            Some(position) => engine.apply_position(position),
            None => warn!(input = %raw, "Skipping unrecognized move"),
        }
    }
    info!(outcome = ?engine.outcome(), "Replay finished");
    engine.snapshot()
}

/// Renders a snapshot as plain text: board, blank line, status line.
pub fn render_text(snapshot: &GameSnapshot) -> String {
    format!("{}\n\n{}", snapshot.board.display(), snapshot.status_message())
}

/// Runs the `replay` command, printing to stdout.
pub fn run(moves: &[String], json: bool) -> Result<()> {
    let snapshot = replay(moves);
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render_text(&snapshot));
    }
    Ok(())
}
