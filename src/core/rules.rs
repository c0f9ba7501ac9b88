//! Collision rules - the single predicate deciding whether a shape fits
//!
//! Pure and deterministic; the engine calls it for every move, rotation,
//! gravity step and spawn.

use crate::core::board::Board;
use crate::core::shape::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Does `shape` placed with its top-left matrix corner at (x, y) overlap a
/// wall, the floor, or an occupied board cell?
///
/// Rows above the grid (board y < 0) are exempt from the occupancy check but
/// still bound horizontally, so a freshly spawned piece may hang partially
/// off the top without registering a false collision.
pub fn collides(shape: &Shape, x: i8, y: i8, board: &Board) -> bool {
    for (cx, cy) in shape.filled_cells() {
        let bx = x + cx;
        let by = y + cy;

        if by >= BOARD_HEIGHT || bx < 0 || bx >= BOARD_WIDTH {
            return true;
        }
        if by >= 0 && board.occupied(bx, by) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_no_collision_on_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&Shape::of(kind), 3, 0, &board), "{:?}", kind);
        }
    }

    #[test]
    fn test_left_wall() {
        let board = Board::new();
        let o = Shape::of(PieceKind::O);
        assert!(!collides(&o, 0, 0, &board));
        assert!(collides(&o, -1, 0, &board));
    }

    #[test]
    fn test_right_wall() {
        let board = Board::new();
        let o = Shape::of(PieceKind::O);
        // O fills matrix columns 0..=1, so x=8 is the last legal column.
        assert!(!collides(&o, 8, 0, &board));
        assert!(collides(&o, 9, 0, &board));
    }

    #[test]
    fn test_floor() {
        let board = Board::new();
        let o = Shape::of(PieceKind::O);
        // O fills matrix rows 0..=1, so y=18 rests on the floor.
        assert!(!collides(&o, 4, 18, &board));
        assert!(collides(&o, 4, 19, &board));
    }

    #[test]
    fn test_occupied_cell() {
        let mut board = Board::new();
        board.set(4, 10, true);

        let o = Shape::of(PieceKind::O);
        assert!(collides(&o, 4, 10, &board));
        assert!(collides(&o, 3, 9, &board));
        assert!(!collides(&o, 5, 10, &board));
    }

    #[test]
    fn test_rows_above_grid_skip_occupancy() {
        let mut board = Board::new();
        // Top row fully occupied except nothing matters: the shape cells
        // sit above the grid at y=-2 and only row -1/-2 would be checked.
        for x in 0..BOARD_WIDTH {
            board.set(x, 0, true);
        }

        let o = Shape::of(PieceKind::O);
        assert!(!collides(&o, 4, -2, &board));
        // One row lower the bottom half of the O reaches row 0 and overlaps.
        assert!(collides(&o, 4, -1, &board));
    }

    #[test]
    fn test_rows_above_grid_still_bound_horizontally() {
        let board = Board::new();
        let o = Shape::of(PieceKind::O);
        assert!(collides(&o, -1, -2, &board));
        assert!(collides(&o, 9, -2, &board));
    }

    #[test]
    fn test_i_piece_spans_full_height_range() {
        let board = Board::new();
        let i = Shape::of(PieceKind::I);
        // I row is at relative y=1: legal from y=-1 down to y=18.
        assert!(!collides(&i, 3, -1, &board));
        assert!(!collides(&i, 3, 18, &board));
        assert!(collides(&i, 3, 19, &board));
        // And horizontally 0..=6.
        assert!(!collides(&i, 0, 5, &board));
        assert!(!collides(&i, 6, 5, &board));
        assert!(collides(&i, 7, 5, &board));
    }
}
