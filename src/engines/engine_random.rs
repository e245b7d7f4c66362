//! Uniform random opponent.
//!
//! Selects uniformly from the successor states and is primarily used for
//! diagnostics and as a baseline in engine matches.

use rand::prelude::IndexedRandom;
use rand::RngCore;

use crate::engines::engine_trait::Engine;
use crate::errors::ChameleonErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::state_generator::get_next_game_states;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Chameleon Random"
    }

    fn choose_state(
        &mut self,
        game_state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Result<GameState, ChameleonErrors> {
        let next_states = get_next_game_states(game_state)?;
        let picked = next_states
            .as_slice()
            .choose(rng)
            .ok_or(ChameleonErrors::NoLegalMoves)?;
        Ok(picked.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::game_state::game_state::get_start_game_state;
    use crate::game_state::players::PlayerType;

    #[test]
    fn the_pick_is_one_of_the_successors() -> Result<(), ChameleonErrors> {
        let game =
            get_start_game_state([PlayerType::Computer; 4]).ok_or(ChameleonErrors::FailedTest)?;
        let next_states = get_next_game_states(&game)?;

        let mut engine = RandomEngine::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = engine.choose_state(&game, &mut rng)?;
            let hits = next_states.iter().filter(|state| **state == picked).count();
            assert_eq!(hits, 1);
        }
        Ok(())
    }

    #[test]
    fn a_stuck_player_is_an_error() {
        use crate::board::color::Color;
        use crate::game_state::limits::Limits;
        use crate::game_state::pawn::Pawn;

        // A knight on the center of the smallest box has nowhere to go.
        let game = GameState {
            pawns: vec![Pawn {
                id: 0,
                owner: Color::Red,
                position: (4, 4),
                knight_color: Color::Blue,
            }],
            limits: Limits {
                min_row: 3,
                max_row: 5,
                min_col: 3,
                max_col: 5,
            },
            players: [PlayerType::Computer; 4],
            turn: Color::Red,
        };

        let mut engine = RandomEngine::new();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = engine.choose_state(&game, &mut rng);
        assert!(matches!(picked, Err(ChameleonErrors::NoLegalMoves)));
    }
}
