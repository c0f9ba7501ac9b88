//! Engine module - the game state machine
//!
//! Owns the board, the active and next pieces, the score and the lifecycle
//! phase. Commands and gravity ticks are the only entry points; each applies
//! the pure collision/rotation functions and mutates state, then the host
//! reads a fresh snapshot. No command sequence panics: rejected moves are
//! silent no-ops and game over is a normal outcome, recoverable via `Start`.

use crate::core::rng::PieceSource;
use crate::core::rules::collides;
use crate::core::scoring::score_for_lines;
use crate::core::shape::Shape;
use crate::core::snapshot::Snapshot;
use crate::core::Board;
use crate::types::{Command, Phase, BOARD_HEIGHT, SPAWN_X, SPAWN_Y};

/// The falling piece: a shape plus the grid offset of its matrix corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Complete game state. The engine exclusively owns every field; the
/// presentation layer only ever sees a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Option<ActivePiece>,
    next: Shape,
    score: u32,
    phase: Phase,
    source: PieceSource,
}

impl Engine {
    /// Create an engine awaiting its first `Start`, with a seeded piece
    /// source. The next-piece preview is already populated.
    pub fn new(seed: u32) -> Self {
        let mut source = PieceSource::new(seed);
        let next = source.draw();
        Self {
            board: Board::new(),
            active: None,
            next,
            score: 0,
            phase: Phase::AwaitingStart,
            source,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_shape(&self) -> Shape {
        self.next
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Apply one input command. Movement and rotation are accepted only
    /// while running; `Start` works from any phase.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::MoveLeft => self.try_shift(-1, 0),
            Command::MoveRight => self.try_shift(1, 0),
            Command::SoftDrop => self.try_shift(0, 1),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Start or restart: empty board, zero score, fresh piece stream,
    /// and the first piece spawned in the same transition.
    fn start(&mut self) {
        self.board.clear();
        self.score = 0;
        self.active = None;
        self.next = self.source.draw();
        self.phase = Phase::Running;

        // An empty board cannot block the spawn position.
        self.spawn();
    }

    /// Promote the cached next shape to the active piece and draw a new
    /// next. On a blocked spawn the game ends with the board untouched.
    fn spawn(&mut self) {
        let candidate = ActivePiece::spawn(self.next);
        self.next = self.source.draw();

        if collides(&candidate.shape, candidate.x, candidate.y, &self.board) {
            self.active = None;
            self.phase = Phase::GameOver;
        } else {
            self.active = Some(candidate);
        }
    }

    /// Translate the active piece if the candidate position is free;
    /// otherwise do nothing.
    fn try_shift(&mut self, dx: i8, dy: i8) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };

        let (nx, ny) = (piece.x + dx, piece.y + dy);
        if !collides(&piece.shape, nx, ny, &self.board) {
            self.active = Some(ActivePiece {
                x: nx,
                y: ny,
                ..piece
            });
        }
    }

    /// Rotate the active piece in place if the rotated matrix fits; no wall
    /// kicks are attempted, so rotation against a wall simply fails.
    fn try_rotate(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };

        let rotated = piece.shape.rotated();
        if !collides(&rotated, piece.x, piece.y, &self.board) {
            self.active = Some(ActivePiece {
                shape: rotated,
                ..piece
            });
        }
    }

    /// One gravity step. Moves the active piece down a row, or, when it is
    /// resting, locks it: merge, clear lines, score, spawn the next piece,
    /// and detect game over.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };

        if !collides(&piece.shape, piece.x, piece.y + 1, &self.board) {
            self.active = Some(ActivePiece {
                y: piece.y + 1,
                ..piece
            });
            return;
        }

        self.lock(piece);
    }

    fn lock(&mut self, piece: ActivePiece) {
        self.active = None;
        self.board.merge(&piece.shape, piece.x, piece.y);

        let cleared = self.board.clear_full_rows();
        self.score += score_for_lines(cleared.len());

        self.spawn();
    }

    /// Project the current state into `out` (reusable buffer).
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                out.grid[y as usize][x as usize] = u8::from(self.board.occupied(x, y));
            }
        }

        if let Some(piece) = self.active {
            for (cx, cy) in piece.shape.filled_cells() {
                let (bx, by) = (piece.x + cx, piece.y + cy);
                // Rows above the grid are simply not rendered.
                if by >= 0 && by < BOARD_HEIGHT && bx >= 0 && bx < self.board.width() {
                    out.grid[by as usize][bx as usize] = 1;
                }
            }
        }

        out.next = self.next;
        out.score = self.score;
        out.phase = self.phase;
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(1)
    }
}
