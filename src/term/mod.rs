//! Terminal presentation layer.
//!
//! Reads engine snapshots and feeds commands back; holds no game state of
//! its own.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::render_rows;
