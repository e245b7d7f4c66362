//! Minimal self-play match harness for local testing.
//!
//! Runs one ranked engine per seated color against the others, with a
//! caller-provided random source so whole matches replay from a seed.

use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::time::Instant;

use crate::board::color::{Color, COLOR_COUNT};
use crate::engines::engine_ranked::{AiLevel, RankedEngine};
use crate::engines::engine_trait::Engine;
use crate::errors::ChameleonErrors;
use crate::game_state::game_state::{get_start_game_state, GameState};
use crate::game_state::players::PlayerType;
use crate::move_generation::state_generator::is_game_over;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// One color outlived everyone else.
    Winner(Color),
    /// The named color still had pawns but no move, ending the game with
    /// several colors on the board.
    Blocked(Color),
    /// The turn cap was reached first.
    TurnLimit,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Level per seat, `None` leaves the seat empty. At least two seats
    /// must be filled.
    pub seats: [Option<AiLevel>; COLOR_COUNT],
    pub max_turns: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seats: [Some(AiLevel::Normal); COLOR_COUNT],
            max_turns: 300,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub turn_count: u16,
    pub move_counts: [u32; COLOR_COUNT],
    pub total_time_ns: [u128; COLOR_COUNT],
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub wins: [u16; COLOR_COUNT],
    pub blocked: u16,
    pub turn_limited: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub moves: [u32; COLOR_COUNT],
    pub total_time_ns: [u128; COLOR_COUNT],
    pub avg_move_time_ms: [f64; COLOR_COUNT],
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} red_wins={} green_wins={} yellow_wins={} blue_wins={} blocked={} turn_limited={} overall_avg_ms={:.3}",
            self.games,
            self.wins[0],
            self.wins[1],
            self.wins[2],
            self.wins[3],
            self.blocked,
            self.turn_limited,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single match with one ranked engine per seated color.
pub fn play_match(
    config: MatchConfig,
    rng: &mut dyn RngCore,
) -> Result<MatchResult, ChameleonErrors> {
    let players = config
        .seats
        .map(|seat| seat.map_or(PlayerType::None, |_| PlayerType::Computer));
    let mut state = get_start_game_state(players).ok_or(ChameleonErrors::NotEnoughPlayers)?;

    // Empty seats get an engine too. They never hold the turn, so the
    // spare engines just sit idle.
    let mut engines = config
        .seats
        .map(|seat| RankedEngine::new(seat.unwrap_or_default()));

    let mut turn_count = 0u16;
    let mut move_counts = [0u32; COLOR_COUNT];
    let mut total_time_ns = [0u128; COLOR_COUNT];

    for _ in 0..config.max_turns {
        if is_game_over(&state) {
            let outcome = match state.sole_survivor() {
                Some(winner) => MatchOutcome::Winner(winner),
                None => MatchOutcome::Blocked(state.turn),
            };
            return Ok(MatchResult {
                outcome,
                final_state: state,
                turn_count,
                move_counts,
                total_time_ns,
            });
        }

        let mover = state.turn;
        let started = Instant::now();
        state = engines[mover.index()].choose_state(&state, rng)?;
        let elapsed_ns = started.elapsed().as_nanos();

        turn_count = turn_count.saturating_add(1);
        move_counts[mover.index()] = move_counts[mover.index()].saturating_add(1);
        total_time_ns[mover.index()] = total_time_ns[mover.index()].saturating_add(elapsed_ns);
    }

    Ok(MatchResult {
        outcome: MatchOutcome::TurnLimit,
        final_state: state,
        turn_count,
        move_counts,
        total_time_ns,
    })
}

/// Play a series of matches and aggregate the outcomes.
///
/// Every game replays deterministically from `base_seed` plus its index.
pub fn play_match_series(config: MatchSeriesConfig) -> Result<MatchSeriesStats, ChameleonErrors> {
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut rng = StdRng::seed_from_u64(seed);
        let result = play_match(config.per_game.clone(), &mut rng)?;

        for color_index in 0..COLOR_COUNT {
            stats.moves[color_index] =
                stats.moves[color_index].saturating_add(result.move_counts[color_index]);
            stats.total_time_ns[color_index] =
                stats.total_time_ns[color_index].saturating_add(result.total_time_ns[color_index]);
        }

        match result.outcome {
            MatchOutcome::Winner(color) => stats.wins[color.index()] += 1,
            MatchOutcome::Blocked(_) => stats.blocked += 1,
            MatchOutcome::TurnLimit => stats.turn_limited += 1,
        }
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "[series] game {}/{} seed={} result={:?} turns={}",
                i + 1,
                config.games,
                seed,
                result.outcome,
                result.turn_count
            );
        }
    }

    let mut total_ns = 0u128;
    let mut total_moves = 0u32;
    for color_index in 0..COLOR_COUNT {
        stats.avg_move_time_ms[color_index] =
            avg_ns_per_move_ms(stats.total_time_ns[color_index], stats.moves[color_index]);
        total_ns = total_ns.saturating_add(stats.total_time_ns[color_index]);
        total_moves = total_moves.saturating_add(stats.moves[color_index]);
    }
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
