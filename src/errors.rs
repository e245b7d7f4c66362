//! Errors used throughout the chameleon chess engine.
//!
//! `ChameleonErrors` is the single error type across the crate. Functions in
//! the engine return `Result<..., ChameleonErrors>` for expected failure
//! modes; callers match on the variant to recover or to surface a precise
//! diagnostic. Variants carry contextual payloads where they help.

use crate::board::position::Position;

/// Unified error type for the chameleon chess engine.
///
/// - Treat `FailedTest` as a test-only quick-fail value.
/// - Treat `NoPawnAtLocation` and `PawnIndexOutOfRange` as internal
///   corruption: a well-formed `GameState` never produces them.
/// - Treat `NoLegalMoves` and `NotEnoughPlayers` as domain-level conditions
///   requiring specific handling in the host (game over screen, setup
///   screen validation).
#[derive(Debug)]
pub enum ChameleonErrors {
    /// Generic failure used in tests when no more specific variant applies.
    FailedTest,

    /// Attempted to step a position by the delta `(d_row, d_col)` which
    /// would place it off the board.
    ///
    /// Payload: (origin_position, d_row, d_col)
    TriedToMoveOutOfBounds((Position, i8, i8)),

    /// A pawn lookup at the given position found nothing.
    ///
    /// Payload: the queried position.
    NoPawnAtLocation(Position),

    /// A pawn index into the state's pawn collection was out of range.
    ///
    /// Payload: the offending index.
    PawnIndexOutOfRange(usize),

    /// A destination generator was asked to start from a cell that does not
    /// hold a pawn of the moving color in the expected role.
    ///
    /// Payload: the queried start position.
    InvalidMoveStartCondition(Position),

    /// The player to move has no legal move, so an engine could not choose
    /// a successor state.
    NoLegalMoves,

    /// A match or start configuration activates fewer than two seats.
    NotEnoughPlayers,
}
