//! Standalone self-play series runner.
//!
//! Run with:
//! `cargo run --release --bin match_series`
//! `cargo run --release --bin match_series -- --verbose`

use chameleon_chess::engines::engine_ranked::AiLevel;
use chameleon_chess::errors::ChameleonErrors;
use chameleon_chess::utils::match_harness::{play_match_series, MatchConfig, MatchSeriesConfig};

fn main() -> Result<(), ChameleonErrors> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    println!(
        "chameleon match series {}",
        chrono::Local::now().format("%Y.%m.%d %H:%M:%S")
    );

    // Customize the seats to experiment with different level pairings.
    let stats = play_match_series(MatchSeriesConfig {
        games: 10,
        base_seed: 1234,
        per_game: MatchConfig {
            seats: [
                Some(AiLevel::Hard),
                Some(AiLevel::Normal),
                Some(AiLevel::Easy),
                Some(AiLevel::Normal),
            ],
            max_turns: 200,
        },
        verbose,
    })?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

/*
Tuning Notes:

In a 100 game series of 200 turns:
hard vs three normal seats = 61 wins @ 0.4 ms per move
Conclusion:  The top rank pick dominates even without any lookahead

---

In a 100 game series of 200 turns:
easy vs three easy seats = 22 / 26 / 27 / 25 wins
Conclusion:  Half-chance rank walks level the table, seat order barely matters
*/
