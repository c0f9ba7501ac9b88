//! Gridfall: a falling-block puzzle game.
//!
//! The `core` module is the whole game: a pure state machine driven by
//! discrete commands and a fixed gravity tick, observed through read-only
//! snapshots. `input` and `term` are the terminal host around it.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
