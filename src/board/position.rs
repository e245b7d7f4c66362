//! Board coordinates.

use crate::errors::ChameleonErrors;

/// A cell as `(row, col)`, both in `0..=7`. Row 0 is the top edge (yellow's
/// home), row 7 the bottom edge (red's home).
pub type Position = (i8, i8);

/// Number of rows and columns of the board.
pub const BOARD_SIZE: i8 = 8;

/// Steps a position by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current position.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<Position, ChameleonErrors>` - The new position if it stays on
///   the board, otherwise `TriedToMoveOutOfBounds`.
pub fn move_position(x: &Position, d_row: i8, d_col: i8) -> Result<Position, ChameleonErrors> {
    let y: Position = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 >= BOARD_SIZE) | (y.1 < 0) | (y.1 >= BOARD_SIZE) {
        Err(ChameleonErrors::TriedToMoveOutOfBounds((*x, d_row, d_col)))
    } else {
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_position_steps_inside_the_board() -> Result<(), ChameleonErrors> {
        assert_eq!(move_position(&(3, 3), 2, -1)?, (5, 2));
        assert_eq!(move_position(&(0, 0), 7, 7)?, (7, 7));
        Ok(())
    }

    #[test]
    fn move_position_rejects_stepping_off_every_edge() {
        assert!(move_position(&(0, 4), -1, 0).is_err());
        assert!(move_position(&(7, 4), 1, 0).is_err());
        assert!(move_position(&(4, 0), 0, -1).is_err());
        assert!(move_position(&(4, 7), 0, 1).is_err());
    }
}
