//! Pawn records and the opening pawn sets.

use crate::board::color::Color;
use crate::board::field_colors::get_field_color;
use crate::board::position::Position;
use crate::game_state::role::{role_on_color, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pawn {
    /// Stable identity, unique within a game and kept across the whole
    /// state lineage.
    pub id: u8,
    pub owner: Color,
    pub position: Position,
    /// Cell color on which this pawn moves as a knight. Pins the pawn's
    /// whole color-to-role mapping, see [`crate::game_state::role`].
    pub knight_color: Color,
}

impl Pawn {
    /// The role this pawn plays right now, looked up from the color of the
    /// cell it stands on. Derived on every call, never cached.
    pub fn active_role(&self) -> Role {
        role_on_color(self.knight_color, get_field_color(&self.position))
    }
}

/// The opening cells of a color: the central four cells of its home edge.
pub const fn home_cells(color: Color) -> [Position; 4] {
    match color {
        Color::Red => [(7, 2), (7, 3), (7, 4), (7, 5)],
        Color::Green => [(2, 0), (3, 0), (4, 0), (5, 0)],
        Color::Yellow => [(0, 2), (0, 3), (0, 4), (0, 5)],
        Color::Blue => [(2, 7), (3, 7), (4, 7), (5, 7)],
    }
}

/// Phase of the knight-color cycle over a color's home cells. The phases
/// even out the opening material on the fixed cell coloring: red and
/// yellow open with four rooks, green and blue with one pawn of each role,
/// and every player fields four different pawn kinds.
const fn knight_color_phase(color: Color) -> usize {
    match color {
        Color::Red => 3,
        Color::Green => 0,
        Color::Yellow => 2,
        Color::Blue => 0,
    }
}

/// The standard four opening pawns of `color`: knight colors cycle in
/// enumeration order with the per-color phase, one pawn per home cell in
/// increasing coordinate order.
pub fn start_pawns(color: Color) -> [Pawn; 4] {
    let cells = home_cells(color);
    let mut pawns = [Pawn {
        id: 0,
        owner: color,
        position: cells[0],
        knight_color: color,
    }; 4];
    for (k, pawn) in pawns.iter_mut().enumerate() {
        pawn.id = (color.index() * 4 + k) as u8;
        pawn.position = cells[k];
        pawn.knight_color = color.advanced(k + knight_color_phase(color));
    }
    pawns
}
