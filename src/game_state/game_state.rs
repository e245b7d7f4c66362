//! The immutable game snapshot.
//!
//! A `GameState` is produced by [`get_start_game_state`] or by applying one
//! legal move to an existing state, and is never mutated afterwards. All
//! queries borrow; all transitions clone and return a fresh snapshot.

use crate::board::color::{Color, COLORS};
use crate::board::position::Position;
use crate::game_state::limits::Limits;
use crate::game_state::pawn::{start_pawns, Pawn};
use crate::game_state::players::{is_enough_players, PlayerType, Players};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// All surviving pawns in stable order. Move generation walks this
    /// order, so it is part of the engine's determinism.
    pub pawns: Vec<Pawn>,
    pub limits: Limits,
    pub players: Players,
    /// Color to move.
    pub turn: Color,
}

impl GameState {
    pub fn pawn_index_at(&self, position: &Position) -> Option<usize> {
        self.pawns
            .iter()
            .position(|pawn| pawn.position == *position)
    }

    pub fn pawn_at(&self, position: &Position) -> Option<&Pawn> {
        self.pawns.iter().find(|pawn| pawn.position == *position)
    }

    pub fn count_pawns_of(&self, color: Color) -> usize {
        self.pawns.iter().filter(|pawn| pawn.owner == color).count()
    }

    /// A color is alive while its seat is taken and it still owns a pawn.
    pub fn is_color_alive(&self, color: Color) -> bool {
        self.players[color.index()] != PlayerType::None && self.count_pawns_of(color) > 0
    }

    pub fn count_alive_colors(&self) -> usize {
        COLORS
            .iter()
            .filter(|color| self.is_color_alive(**color))
            .count()
    }

    /// The one color left standing, once the game has come down to one.
    pub fn sole_survivor(&self) -> Option<Color> {
        let mut survivor = None;
        for color in COLORS {
            if self.is_color_alive(color) {
                if survivor.is_some() {
                    return None;
                }
                survivor = Some(color);
            }
        }
        survivor
    }
}

/// Builds the standard opening state for the taken seats.
///
/// Every color with a seat other than [`PlayerType::None`] receives its
/// four opening pawns; the lowest-ordered active color moves first and the
/// limits span the whole board. Returns `None` when fewer than two seats
/// are taken.
pub fn get_start_game_state(players: Players) -> Option<GameState> {
    if !is_enough_players(&players) {
        return None;
    }
    let mut pawns = Vec::with_capacity(16);
    let mut turn = None;
    for color in COLORS {
        if players[color.index()] == PlayerType::None {
            continue;
        }
        pawns.extend_from_slice(&start_pawns(color));
        if turn.is_none() {
            turn = Some(color);
        }
    }
    Some(GameState {
        pawns,
        limits: Limits::start(),
        players,
        turn: turn?,
    })
}
