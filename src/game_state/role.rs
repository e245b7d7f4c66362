//! Pawn roles and the chameleon mapping.
//!
//! A pawn has no fixed piece type. Its mapping from cell color to role is
//! pinned by a single color, the *knight color*: on cells of that color the
//! pawn moves as a knight, and walking the colors onward in enumeration
//! order yields queen, bishop and rook.

use crate::board::color::{Color, COLOR_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Knight,
    Queen,
    Bishop,
    Rook,
}

/// Role sequence walked from a pawn's knight color.
pub const ROLE_WHEEL: [Role; 4] = [Role::Knight, Role::Queen, Role::Bishop, Role::Rook];

impl Role {
    /// One lowercase letter for rendering (n, q, b, r).
    pub const fn letter(self) -> char {
        match self {
            Role::Knight => 'n',
            Role::Queen => 'q',
            Role::Bishop => 'b',
            Role::Rook => 'r',
        }
    }
}

/// The role a pawn with the given knight color takes on a cell of color
/// `field`.
pub const fn role_on_color(knight_color: Color, field: Color) -> Role {
    ROLE_WHEEL[(field.index() + COLOR_COUNT - knight_color.index()) % COLOR_COUNT]
}
