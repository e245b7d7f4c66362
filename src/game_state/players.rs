//! Seat types and setup-screen helpers.

use crate::board::color::COLOR_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
    /// The seat is empty and its color never takes part in the game.
    None,
    Human,
    Computer,
}

/// One seat type per color, indexed by `Color::index()`.
pub type Players = [PlayerType; COLOR_COUNT];

/// The seat type a setup screen toggles to on tap: human, computer, none,
/// and around again.
pub const fn get_next_player_type(current: PlayerType) -> PlayerType {
    match current {
        PlayerType::Human => PlayerType::Computer,
        PlayerType::Computer => PlayerType::None,
        PlayerType::None => PlayerType::Human,
    }
}

/// True when at least two seats are taken.
pub fn is_enough_players(players: &Players) -> bool {
    players
        .iter()
        .filter(|seat| **seat != PlayerType::None)
        .count()
        >= 2
}
