//! Shape module - tetromino cell matrices and the rotation transform
//!
//! A shape is a square 0/1 matrix (side 2, 3 or 4 depending on the piece)
//! stored inside a fixed 4x4 array. Keeping the matrix square is what makes
//! the in-place 90-degree rotation well defined for every catalog member.

use crate::types::PieceKind;

/// Maximum matrix side (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A square cell matrix describing which relative cells of a piece are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Spawn-orientation matrix for a piece kind.
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[
                [0, 0, 0, 0], //
                [1, 1, 1, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            PieceKind::O => Self::from_rows(&[
                [1, 1], //
                [1, 1],
            ]),
            PieceKind::T => Self::from_rows(&[
                [0, 1, 0], //
                [1, 1, 1],
                [0, 0, 0],
            ]),
            PieceKind::S => Self::from_rows(&[
                [0, 1, 1], //
                [1, 1, 0],
                [0, 0, 0],
            ]),
            PieceKind::Z => Self::from_rows(&[
                [1, 1, 0], //
                [0, 1, 1],
                [0, 0, 0],
            ]),
            PieceKind::J => Self::from_rows(&[
                [1, 0, 0], //
                [1, 1, 1],
                [0, 0, 0],
            ]),
            PieceKind::L => Self::from_rows(&[
                [0, 0, 1], //
                [1, 1, 1],
                [0, 0, 0],
            ]),
        }
    }

    /// Build a shape from 0/1 rows. The row count is the matrix side.
    fn from_rows<const N: usize>(rows: &[[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Matrix side length (2, 3 or 4).
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the relative cell (x, y) is filled.
    /// Out-of-matrix coordinates read as empty.
    pub fn filled(&self, x: usize, y: usize) -> bool {
        x < self.size() && y < self.size() && self.cells[y][x]
    }

    /// Number of filled cells (4 for every catalog shape).
    pub fn cell_count(&self) -> usize {
        let n = self.size();
        (0..n)
            .map(|y| (0..n).filter(|&x| self.cells[y][x]).count())
            .sum()
    }

    /// Iterate the filled relative cells as (x, y).
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.cells[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// The matrix rotated 90 degrees clockwise: `out[y][x] = in[n-1-x][y]`.
    ///
    /// Total and unchecked; whether the rotated shape fits on the board is
    /// the caller's responsibility. Four applications yield the original.
    pub fn rotated(&self) -> Self {
        let n = self.size();
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                out[y][x] = self.cells[n - 1 - x][y];
            }
        }
        Self {
            size: self.size,
            cells: out,
        }
    }
}
