//! Scripted play.
//!
//! Generates valid random rounds and whole games from a seed. Useful for
//! demo data, property tests and benchmarks.
//!
//! ```
//! use five_ledger::{sim, GameConfig};
//!
//! let game = sim::play_out(GameConfig::new(["Mom", "Dad", "God"]), 7);
//! assert!(game.is_complete());
//!
//! let again = sim::play_out(GameConfig::new(["Mom", "Dad", "God"]), 7);
//! assert!(game.same_history(&again));
//! ```

use tracing::debug;

use crate::core::{GameConfig, ScoreRng, MAX_ROUND_SCORE};
use crate::game::Game;
use crate::round::Round;

/// Chance that a non-winner still goes out with 0.
const SHARED_WIN_CHANCE: f64 = 0.15;

/// Chance that a losing hand is a full 50.
const FIFTY_CHANCE: f64 = 0.1;

/// A valid, complete round for the game's current active players.
///
/// # Panics
///
/// Panics if fewer than two players are active.
pub fn random_round(game: &Game, rng: &mut ScoreRng) -> Round {
    let mut round = game.new_round();
    let players: Vec<_> = round.players().cloned().collect();
    assert!(players.len() >= 2, "Need at least two active players to deal a round!");

    let winner = rng.gen_index(players.len());
    let mut scores: Vec<u32> = (0..players.len())
        .map(|seat| {
            if seat == winner || rng.gen_bool(SHARED_WIN_CHANCE) {
                0
            } else if rng.gen_bool(FIFTY_CHANCE) {
                MAX_ROUND_SCORE
            } else {
                rng.gen_range(1..MAX_ROUND_SCORE)
            }
        })
        .collect();

    if scores.iter().all(|s| *s == 0) {
        let seat = (winner + 1 + rng.gen_index(players.len() - 1)) % players.len();
        scores[seat] = rng.gen_range(1..MAX_ROUND_SCORE + 1);
    }

    for (player, score) in players.iter().zip(scores) {
        round.set_score(player.name(), score);
    }
    round
}

/// Append `count` random rounds, stopping early if the game completes.
pub fn play_rounds(game: &mut Game, count: usize, rng: &mut ScoreRng) {
    for _ in 0..count {
        if game.is_complete() {
            break;
        }
        let round = random_round(game, rng);
        game.add_round(round);
    }
}

/// Play a fresh game until one player is left.
///
/// # Panics
///
/// Panics if the configuration is invalid.
#[must_use]
pub fn play_out(config: GameConfig, seed: u64) -> Game {
    let mut rng = ScoreRng::new(seed);
    let mut game = config.build();
    while !game.is_complete() {
        let round = random_round(&game, &mut rng);
        game.add_round(round);
    }
    debug!(game = %game.id(), seed, rounds = game.len(), "played out game");
    game
}
