//! Crate root module declarations for the chameleon chess rules project.
//!
//! This file exposes all top-level subsystems (board geometry, game state,
//! move generation, scoring, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod board {
    pub mod color;
    pub mod field_colors;
    pub mod position;
}

pub mod game_state {
    pub mod game_state;
    pub mod limits;
    pub mod pawn;
    pub mod players;
    pub mod role;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod role_moves;
    pub mod state_generator;
}

pub mod search {
    pub mod state_scoring;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_ranked;
    pub mod engine_trait;
}

pub mod utils {
    pub mod match_harness;
    pub mod render_game_state;
}

pub mod errors;
