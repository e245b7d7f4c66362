//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and match
//! logs in text environments.
//!
//! Every cell is two characters wide. A pawn prints as its owner's
//! uppercase letter followed by its current role, an empty cell prints
//! the cell color in lowercase, and cells outside the limits are blank.

use crate::board::field_colors::get_field_color;
use crate::game_state::game_state::GameState;
use crate::game_state::role::Role;

/// Render the board to a string for terminal output.
///
/// Row 0 is the top line, column indices run left to right.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("    0  1  2  3  4  5  6  7\n");

    for row in 0..8i8 {
        out.push(char::from(b'0' + row as u8));
        out.push_str("  ");

        for col in 0..8i8 {
            let (first, second) = cell_chars(game_state, (row, col));
            out.push(first);
            out.push(second);
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("    0  1  2  3  4  5  6  7");

    out
}

fn cell_chars(game_state: &GameState, position: (i8, i8)) -> (char, char) {
    if !game_state.limits.contains(&position) {
        return (' ', ' ');
    }
    if let Some(pawn) = game_state.pawn_at(&position) {
        let owner = pawn.owner.letter().to_ascii_uppercase();
        return (owner, role_letter(pawn.active_role()));
    }
    (get_field_color(&position).letter(), ' ')
}

fn role_letter(role: Role) -> char {
    match role {
        Role::Knight => 'n',
        Role::Queen => 'q',
        Role::Bishop => 'b',
        Role::Rook => 'r',
    }
}
