//! The shrinking playable box.
//!
//! Play starts on the whole board. After every move each side of the box
//! retracts toward the surviving pawns, so the vacated home ranks/files of
//! an eliminated player fall out of play. Sides never move outward and the
//! box never shrinks below 3×3.

use crate::board::position::{Position, BOARD_SIZE};
use crate::game_state::pawn::Pawn;

/// Minimum row and column span of the box.
pub const SMALLEST_SPAN: i8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub min_row: i8,
    pub max_row: i8,
    pub min_col: i8,
    pub max_col: i8,
}

impl Limits {
    /// Limits spanning the whole board.
    pub const fn start() -> Limits {
        Limits {
            min_row: 0,
            max_row: BOARD_SIZE - 1,
            min_col: 0,
            max_col: BOARD_SIZE - 1,
        }
    }

    pub const fn contains(&self, position: &Position) -> bool {
        position.0 >= self.min_row
            && position.0 <= self.max_row
            && position.1 >= self.min_col
            && position.1 <= self.max_col
    }

    pub const fn row_span(&self) -> i8 {
        self.max_row - self.min_row + 1
    }

    pub const fn col_span(&self) -> i8 {
        self.max_col - self.min_col + 1
    }

    /// True once both spans sit at the 3×3 floor.
    pub const fn is_smallest(&self) -> bool {
        self.row_span() == SMALLEST_SPAN && self.col_span() == SMALLEST_SPAN
    }

    /// Center cell of the box. Only meaningful once [`Limits::is_smallest`]
    /// holds (odd spans).
    pub const fn center(&self) -> Position {
        (self.min_row + 1, self.min_col + 1)
    }

    /// Retracts every side toward the given pawns and returns the new box.
    ///
    /// Each side moves inward only while its outermost rank/file holds no
    /// pawn and the span stays above the floor, so the result still
    /// contains every pawn the previous box contained.
    pub fn shrink_to_pawns(&self, pawns: &[Pawn]) -> Limits {
        let mut next = *self;
        while next.row_span() > SMALLEST_SPAN && !row_occupied(pawns, next.min_row) {
            next.min_row += 1;
        }
        while next.row_span() > SMALLEST_SPAN && !row_occupied(pawns, next.max_row) {
            next.max_row -= 1;
        }
        while next.col_span() > SMALLEST_SPAN && !col_occupied(pawns, next.min_col) {
            next.min_col += 1;
        }
        while next.col_span() > SMALLEST_SPAN && !col_occupied(pawns, next.max_col) {
            next.max_col -= 1;
        }
        next
    }
}

fn row_occupied(pawns: &[Pawn], row: i8) -> bool {
    pawns.iter().any(|pawn| pawn.position.0 == row)
}

fn col_occupied(pawns: &[Pawn], col: i8) -> bool {
    pawns.iter().any(|pawn| pawn.position.1 == col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;

    fn pawn_at(position: Position) -> Pawn {
        Pawn {
            id: 0,
            owner: Color::Red,
            position,
            knight_color: Color::Red,
        }
    }

    #[test]
    fn start_spans_the_whole_board() {
        let limits = Limits::start();
        assert_eq!(limits.row_span(), 8);
        assert_eq!(limits.col_span(), 8);
        assert!(!limits.is_smallest());
        assert!(limits.contains(&(0, 0)));
        assert!(limits.contains(&(7, 7)));
    }

    #[test]
    fn sides_retract_to_the_outermost_pawns() {
        let pawns = [pawn_at((2, 3)), pawn_at((5, 6))];
        let shrunk = Limits::start().shrink_to_pawns(&pawns);
        assert_eq!(
            shrunk,
            Limits {
                min_row: 2,
                max_row: 5,
                min_col: 3,
                max_col: 6,
            }
        );
        assert!(!shrunk.contains(&(1, 4)));
        assert!(shrunk.contains(&(4, 4)));
    }

    #[test]
    fn box_never_drops_below_three_by_three() {
        let pawns = [pawn_at((0, 0))];
        let shrunk = Limits::start().shrink_to_pawns(&pawns);
        assert_eq!(
            shrunk,
            Limits {
                min_row: 0,
                max_row: 2,
                min_col: 0,
                max_col: 2,
            }
        );
        assert!(shrunk.is_smallest());
        assert_eq!(shrunk.center(), (1, 1));
    }

    #[test]
    fn shrinking_is_idempotent_for_unchanged_pawns() {
        let pawns = [pawn_at((3, 3)), pawn_at((4, 5))];
        let once = Limits::start().shrink_to_pawns(&pawns);
        assert_eq!(once.shrink_to_pawns(&pawns), once);
    }

    #[test]
    fn occupied_edges_hold_their_side() {
        let pawns = [pawn_at((0, 2)), pawn_at((7, 5))];
        let shrunk = Limits::start().shrink_to_pawns(&pawns);
        assert_eq!(shrunk.min_row, 0);
        assert_eq!(shrunk.max_row, 7);
        assert_eq!(shrunk.min_col, 2);
        assert_eq!(shrunk.max_col, 5);
    }
}
