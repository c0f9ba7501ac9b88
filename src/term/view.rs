//! GameView: maps an engine [`Snapshot`] into text rows.
//!
//! This module is pure (no I/O), so the whole layout is unit-testable.

use crate::core::Snapshot;
use crate::types::{Phase, BOARD_WIDTH};

/// Terminal glyphs: each board cell is two columns wide to compensate for
/// the glyph aspect ratio of typical terminal fonts.
const FILLED: &str = "██";
const EMPTY: &str = " ·";

/// Render a snapshot into one string per terminal row.
pub fn render_rows(snap: &Snapshot) -> Vec<String> {
    let inner_w = (BOARD_WIDTH as usize) * 2;
    let mut rows = Vec::with_capacity(snap.grid.len() + 4);

    rows.push(format!("┌{}┐   score {}", "─".repeat(inner_w), snap.score));

    let preview = preview_rows(snap);
    for (y, grid_row) in snap.grid.iter().enumerate() {
        let mut line = String::with_capacity(inner_w + 2);
        line.push('│');
        for &cell in grid_row {
            line.push_str(if cell != 0 { FILLED } else { EMPTY });
        }
        line.push('│');

        match y {
            0 => line.push_str("   next"),
            1..=4 => {
                if let Some(p) = preview.get(y - 1) {
                    line.push_str("   ");
                    line.push_str(p);
                }
            }
            _ => {}
        }
        rows.push(line);
    }

    rows.push(format!("└{}┘", "─".repeat(inner_w)));
    rows.push(status_line(snap.phase).to_string());
    rows
}

/// Up to four rows of the next-piece preview box.
fn preview_rows(snap: &Snapshot) -> Vec<String> {
    let n = snap.next.size();
    (0..n)
        .map(|y| {
            (0..n)
                .map(|x| if snap.next.filled(x, y) { FILLED } else { "  " })
                .collect()
        })
        .collect()
}

fn status_line(phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingStart => "press enter to start  ·  q quits",
        Phase::Running => "←/→ move  ↓ drop  ↑ rotate  ·  q quits",
        Phase::GameOver => "game over  ·  enter restarts  ·  q quits",
    }
}
