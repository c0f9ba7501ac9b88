//! Core module - pure game logic with no I/O dependencies
//!
//! Everything the game rules need lives here: the grid, the shape catalog
//! and rotation transform, the collision predicate, scoring, and the engine
//! state machine that ties them together.

pub mod board;
pub mod engine;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use board::Board;
pub use engine::{ActivePiece, Engine};
pub use rng::PieceSource;
pub use rules::collides;
pub use scoring::score_for_lines;
pub use shape::Shape;
pub use snapshot::Snapshot;
