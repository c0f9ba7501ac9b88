//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of binary cells (piece identity is not
//! tracked once a piece locks). Uses a flat array for cache locality and
//! zero allocation. Coordinates: (x, y) with x in 0..9 left to right and
//! y in 0..19 top to bottom.

use arrayvec::ArrayVec;

use crate::core::shape::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage.
/// Dimensions never change; occupancy changes only via merge or clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x).
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> i8 {
        BOARD_HEIGHT
    }

    /// Whether the cell at (x, y) is occupied. Out-of-bounds reads as empty.
    pub fn occupied(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some_and(|idx| self.cells[idx])
    }

    /// Set cell occupancy at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Merge a locked shape's filled cells into the board at (x, y).
    ///
    /// Cells that land outside the grid are dropped. The engine's collision
    /// checks keep this from happening for any reachable lock position, but
    /// the merge itself stays total.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        for (cx, cy) in shape.filled_cells() {
            self.set(x + cx, y + cy, true);
        }
    }

    /// Clear all full rows and return their indices, top to bottom.
    ///
    /// Two-pointer compaction: surviving rows keep their relative order and
    /// an equal count of empty rows appears at the top, so the board always
    /// retains exactly HEIGHT rows.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, { BOARD_HEIGHT as usize }> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top, sliding surviving rows down.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty out the freed rows at the top.
        self.cells[..write_y * width].fill(false);

        cleared_rows.reverse();
        cleared_rows
    }

    /// Clear the entire board.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Fill one row completely (test setup helper).
    #[cfg(test)]
    pub fn fill_row(&mut self, y: i8) {
        for x in 0..BOARD_WIDTH {
            self.set(x, y, true);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
