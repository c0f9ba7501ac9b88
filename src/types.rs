//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 20;

/// Gravity tick period (milliseconds). The lifecycle phase pauses its
/// effect; the interval itself never changes.
pub const GRAVITY_MS: u64 = 500;

/// Spawn position for new pieces (x, y). Column 3 centers a 4-wide
/// matrix on the 10-wide board.
pub const SPAWN_X: i8 = 3;
pub const SPAWN_Y: i8 = 0;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Input commands accepted by the engine. Each is a parameterless trigger;
/// the host decides when they are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Start,
}

/// Engine lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first `Start` command.
    AwaitingStart,
    Running,
    /// Terminal until the next `Start`.
    GameOver,
}
