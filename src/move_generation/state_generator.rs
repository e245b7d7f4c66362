//! Successor enumeration and the end-of-game test.

use crate::errors::ChameleonErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::apply_move::apply_move_to_game_unchecked;
use crate::move_generation::role_moves::generate_pawn_destinations;

/// Builds every state reachable with one move of the player whose turn it
/// is. Pawns are visited in stored order and destinations in generator
/// order, so equal inputs always produce the same list. A terminal state
/// yields an empty list.
pub fn get_next_game_states(game: &GameState) -> Result<Vec<GameState>, ChameleonErrors> {
    let mut next_states = Vec::new();
    for pawn_index in 0..game.pawns.len() {
        if game.pawns[pawn_index].owner != game.turn {
            continue;
        }
        for destination in generate_pawn_destinations(game, pawn_index)? {
            next_states.push(apply_move_to_game_unchecked(game, pawn_index, destination)?);
        }
    }
    Ok(next_states)
}

/// True when the player to move has at least one destination. Stops at the
/// first hit instead of materializing the whole successor list.
pub fn has_any_legal_move(game: &GameState) -> bool {
    for pawn_index in 0..game.pawns.len() {
        if game.pawns[pawn_index].owner != game.turn {
            continue;
        }
        if let Ok(destinations) = generate_pawn_destinations(game, pawn_index) {
            if !destinations.is_empty() {
                return true;
            }
        }
    }
    false
}

/// A game ends when at most one color is still on the board, or when the
/// player to move has no move left. The second case covers a blocked
/// player whose opponents are still alive.
pub fn is_game_over(game: &GameState) -> bool {
    if game.count_alive_colors() <= 1 {
        return true;
    }
    !has_any_legal_move(game)
}
