//! The fixed coloring of the 64 cells.
//!
//! The two center diagonals cut the board into four wedges (north, east,
//! south, west). Within a wedge the colors cycle by column with a
//! wedge-specific phase, so every wedge and the board as a whole hold each
//! color the same number of times (4 per wedge, 16 overall). Cells on a
//! diagonal belong to the wedge that keeps the partition total: the upper
//! half of the main diagonal counts as west, the lower half as east, the
//! left half of the anti diagonal as south and its right half as north.

use crate::board::color::Color;
use crate::board::position::Position;

/// Cell colors indexed as `FIELD_COLORS[row][col]`.
pub const FIELD_COLORS: [[Color; 8]; 8] = generate_field_colors();

/// The color of the cell at `position`.
///
/// `position` must be on the board; this is a plain table lookup.
pub fn get_field_color(position: &Position) -> Color {
    FIELD_COLORS[position.0 as usize][position.1 as usize]
}

/// The whole 8×8 cell color grid, for rendering.
pub fn get_board() -> &'static [[Color; 8]; 8] {
    &FIELD_COLORS
}

const fn generate_field_colors() -> [[Color; 8]; 8] {
    let mut table = [[Color::Red; 8]; 8];
    let mut row = 0i8;
    while row < 8 {
        let mut col = 0i8;
        while col < 8 {
            table[row as usize][col as usize] = cell_color(row, col);
            col += 1;
        }
        row += 1;
    }
    table
}

const fn cell_color(row: i8, col: i8) -> Color {
    let d_main = row - col;
    let d_anti = row + col - 7;
    // Column phase per wedge: south 0, north 1, west and east 3.
    let phase: i8 = if d_main > 0 && d_anti >= 0 {
        0
    } else if d_main >= 0 && d_anti < 0 {
        3
    } else if d_main < 0 && d_anti <= 0 {
        1
    } else {
        3
    };
    match Color::from_index(((col + phase) % 4) as usize) {
        Some(color) => color,
        // (col + phase) % 4 is always a valid tag.
        None => Color::Red,
    }
}
