//! Read-only view of engine state for the presentation layer.
//!
//! The render grid is a derived projection of {board, active piece}, computed
//! fresh on every request. It is never stored inside the engine, so it cannot
//! diverge from the state it mirrors.

use crate::core::shape::Shape;
use crate::types::{PieceKind, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Everything the presentation layer needs, once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Board cells overlaid with the active piece: 0 = empty, 1 = filled.
    pub grid: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// The cached next shape, for the preview box.
    pub next: Shape,
    pub score: u32,
    pub phase: Phase,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            grid: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            next: Shape::of(PieceKind::I),
            score: 0,
            phase: Phase::AwaitingStart,
        }
    }
}
