//! Level-based opponents built on ranked successor scoring.
//!
//! The engine scores every successor, sorts them best first and walks down
//! the list with a per-level stop chance. Hard always stops at the top,
//! normal almost always does, easy wanders far enough down to be beatable.

use rand::{Rng, RngCore};

use crate::engines::engine_trait::Engine;
use crate::errors::ChameleonErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::state_generator::get_next_game_states;
use crate::search::state_scoring::{StandardScorer, StateScorer};

/// Longest walk down the ranked list. At the weakest level the chance to
/// get this far is below one in four billion.
const RANK_CAP: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiLevel {
    Easy,
    Normal,
    Hard,
}

impl Default for AiLevel {
    fn default() -> Self {
        AiLevel::Normal
    }
}

impl AiLevel {
    /// Chance to stop at the current rank while walking down the ranked
    /// successor list.
    pub const fn keep_probability(self) -> f64 {
        match self {
            AiLevel::Easy => 0.5,
            AiLevel::Normal => 0.9,
            AiLevel::Hard => 1.0,
        }
    }
}

/// Draws the rank of the successor to play. Rank 0 is the best successor,
/// rank k is reached with probability `(1 - keep)^k * keep`.
pub fn nth_best_move_to_select<R: Rng + ?Sized>(level: AiLevel, rng: &mut R) -> usize {
    let keep = level.keep_probability();
    if keep >= 1.0 {
        return 0;
    }
    let mut rank = 0usize;
    while rank < RANK_CAP && !rng.random_bool(keep) {
        rank += 1;
    }
    rank
}

pub struct RankedEngine<S: StateScorer> {
    level: AiLevel,
    scorer: S,
}

impl RankedEngine<StandardScorer> {
    pub fn new(level: AiLevel) -> Self {
        Self {
            level,
            scorer: StandardScorer,
        }
    }
}

impl<S: StateScorer> RankedEngine<S> {
    pub fn with_scorer(level: AiLevel, scorer: S) -> Self {
        Self { level, scorer }
    }
}

impl<S: StateScorer> Engine for RankedEngine<S> {
    fn name(&self) -> &str {
        match self.level {
            AiLevel::Easy => "Chameleon Ranked (easy)",
            AiLevel::Normal => "Chameleon Ranked (normal)",
            AiLevel::Hard => "Chameleon Ranked (hard)",
        }
    }

    fn choose_state(
        &mut self,
        game_state: &GameState,
        rng: &mut dyn RngCore,
    ) -> Result<GameState, ChameleonErrors> {
        let mut scored: Vec<(i32, GameState)> = get_next_game_states(game_state)?
            .into_iter()
            .map(|state| (self.scorer.score(&state, game_state.turn), state))
            .collect();
        if scored.is_empty() {
            return Err(ChameleonErrors::NoLegalMoves);
        }
        // Stable sort keeps generator order among equal scores.
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let rank = nth_best_move_to_select(self.level, rng).min(scored.len() - 1);
        let (_, picked) = scored.swap_remove(rank);
        Ok(picked)
    }
}

/// Plays one computer move at the given level with the thread's generator.
pub fn calc_next_game_state(
    game_state: &GameState,
    level: AiLevel,
) -> Result<GameState, ChameleonErrors> {
    let mut engine = RankedEngine::new(level);
    let mut rng = rand::rng();
    engine.choose_state(game_state, &mut rng)
}
