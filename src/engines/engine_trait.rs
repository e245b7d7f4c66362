//! Engine abstraction for the computer opponents.
//!
//! Selection strategies hide behind a single trait so a match can pick an
//! opponent per seat at runtime without knowing how it chooses.

use rand::RngCore;

use crate::errors::ChameleonErrors;
use crate::game_state::game_state::GameState;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Picks one successor of `game_state` for the player whose turn it
    /// is. Fails with [`ChameleonErrors::NoLegalMoves`] when that player
    /// cannot move.
    fn choose_state(
        &mut self,
        game_state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Result<GameState, ChameleonErrors>;
}
