//! Pluggable snapshot evaluation for the computer opponents.
//!
//! Move selection stays modular by delegating static scoring to this
//! trait, so alternate heuristics can be swapped in without touching the
//! selection code.

use crate::board::color::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::limits::Limits;
use crate::game_state::pawn::Pawn;
use crate::game_state::role::Role;

/// Every pawn on the board is worth this much before its role is counted.
/// Keeping a pawn alive outweighs any role or placement difference.
pub const PAWN_BASE_VALUE: i32 = 1000;

pub trait StateScorer: Send + Sync {
    /// Score from the perspective of `perspective`, higher is better.
    fn score(&self, game_state: &GameState, perspective: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn role_value(role: Role) -> i32 {
        match role {
            Role::Knight => 320,
            Role::Bishop => 330,
            Role::Rook => 500,
            Role::Queen => 900,
        }
    }

    #[inline]
    fn pawn_value(pawn: &Pawn) -> i32 {
        PAWN_BASE_VALUE + Self::role_value(pawn.active_role())
    }
}

impl StateScorer for MaterialScorer {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32 {
        let mut score = 0i32;
        for pawn in &game_state.pawns {
            let value = Self::pawn_value(pawn);
            if pawn.owner == perspective {
                score += value;
            } else {
                score -= value;
            }
        }
        score
    }
}

/// Material plus a placement term that pulls pawns towards the middle of
/// the current box. The box midpoint moves as the limits shrink.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    const CENTER_WEIGHT: i32 = 4;

    fn center_bonus(limits: &Limits, pawn: &Pawn) -> i32 {
        let mid_row = i32::from(limits.min_row + limits.max_row) / 2;
        let mid_col = i32::from(limits.min_col + limits.max_col) / 2;
        let dist_center = (i32::from(pawn.position.0) - mid_row).abs()
            + (i32::from(pawn.position.1) - mid_col).abs();
        (4 - dist_center) * Self::CENTER_WEIGHT
    }
}

impl StateScorer for StandardScorer {
    fn score(&self, game_state: &GameState, perspective: Color) -> i32 {
        let mut score = 0i32;
        for pawn in &game_state.pawns {
            let value = PAWN_BASE_VALUE
                + MaterialScorer::role_value(pawn.active_role())
                + Self::center_bonus(&game_state.limits, pawn);
            if pawn.owner == perspective {
                score += value;
            } else {
                score -= value;
            }
        }
        score
    }
}
