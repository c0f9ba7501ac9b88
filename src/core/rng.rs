//! RNG module - uniform random piece generation
//!
//! Every spawn draws one of the seven tetrominoes uniformly at random
//! (memoryless; no bag). A small seeded LCG keeps games reproducible,
//! which the tests rely on.

use crate::core::shape::Shape;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draws uniformly-random pieces from the fixed catalog.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: SimpleRng,
}

impl PieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// One uniformly-random piece kind.
    pub fn draw_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// One uniformly-random shape in spawn orientation.
    pub fn draw(&mut self) -> Shape {
        Shape::of(self.draw_kind())
    }
}

impl Default for PieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
