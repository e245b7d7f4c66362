//! Applying one generated move to a snapshot.

use crate::board::position::Position;
use crate::errors::ChameleonErrors;
use crate::game_state::game_state::GameState;
use crate::game_state::role::Role;

/// Applies one move and returns the resulting snapshot.
///
/// Unchecked as in: `destination` must come from the destination
/// generators, no legality re-validation happens here. The input state is
/// left untouched.
pub fn apply_move_to_game_unchecked(
    game: &GameState,
    pawn_index: usize,
    destination: Position,
) -> Result<GameState, ChameleonErrors> {
    if pawn_index >= game.pawns.len() {
        return Err(ChameleonErrors::PawnIndexOutOfRange(pawn_index));
    }
    let mut next = game.clone();
    // Handle capture: look up the victim before the mover lands
    let captured = next.pawn_index_at(&destination);
    next.pawns[pawn_index].position = destination;
    if let Some(captured_index) = captured {
        next.pawns.remove(captured_index);
    }
    // The box closes in on the survivors
    next.limits = next.limits.shrink_to_pawns(&next.pawns);
    remove_trapped_knight(&mut next);
    advance_turn(&mut next);
    Ok(next)
}

/// A knight on the center cell of the smallest box can never move again
/// (every jump would leave the box), so it is taken off the board as soon
/// as that situation arises.
fn remove_trapped_knight(next: &mut GameState) {
    if !next.limits.is_smallest() {
        return;
    }
    let center = next.limits.center();
    if let Some(index) = next.pawn_index_at(&center) {
        if next.pawns[index].active_role() == Role::Knight {
            next.pawns.remove(index);
        }
    }
}

/// Hands the turn to the next alive color in enumeration order. When no
/// other color is alive the mover keeps the turn and the state is terminal.
fn advance_turn(next: &mut GameState) {
    for step in 1..=3 {
        let candidate = next.turn.advanced(step);
        if next.is_color_alive(candidate) {
            next.turn = candidate;
            return;
        }
    }
}
