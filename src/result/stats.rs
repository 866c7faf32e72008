//! End-of-game statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Player, MAX_ROUND_SCORE};
use crate::game::Game;
use crate::round::Score;

/// One player's statistics over a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerResult {
    /// The player.
    pub player: Player,

    /// Rounds the player won (scored 0).
    pub wins: u32,

    /// Rounds where the player tied for the highest score.
    pub losses: u32,

    /// Rounds the player scored exactly 50.
    pub number_of_fifties: u32,

    /// Lowest score above 0. `None` if the player won every round they played.
    pub best_non_zero_score: Option<Score>,

    /// Highest score below 50. `None` if every score was 50.
    pub worst_non_fifty_score: Option<Score>,

    /// Mean over every round played.
    pub average_score: f64,

    /// Mean over rounds not scored 50. `None` if every score was 50.
    pub average_non_fifty_score: Option<f64>,
}

impl PlayerResult {
    fn from_scores(player: Player, scores: &[Score], losses: u32) -> Self {
        let count = |target: Score| scores.iter().filter(|s| **s == target).count() as u32;
        let non_fifty: Vec<Score> = scores.iter().copied().filter(|s| *s != MAX_ROUND_SCORE).collect();

        Self {
            player,
            wins: count(0),
            losses,
            number_of_fifties: count(MAX_ROUND_SCORE),
            best_non_zero_score: scores.iter().copied().filter(|s| *s != 0).min(),
            worst_non_fifty_score: non_fifty.iter().copied().max(),
            average_score: mean(scores).unwrap_or(0.0),
            average_non_fifty_score: mean(&non_fifty),
        }
    }
}

/// Statistics snapshot of a completed game.
///
/// Computed once from a [`Game`] and never updated; it keeps no reference
/// to the game it came from.
///
/// ```
/// use five_ledger::{Game, Round};
///
/// let game = Game::with_score_limit(["A", "B"], 50)
///     .with_round(Round::from_scores([("A", 50), ("B", 0)]));
///
/// let result = game.result().unwrap();
/// assert_eq!(result.winner().name(), "B");
/// assert_eq!(result.results_for("A").losses, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    average_score: f64,
    average_non_fifty_score: f64,
    winner: Player,
    losers: Vec<Player>,
    ordered_players: Vec<Player>,
    rounds_played: usize,
    player_results: FxHashMap<Player, PlayerResult>,
}

impl GameResult {
    /// Derive statistics from a completed game.
    ///
    /// Prefer [`Game::result`], which reports an incomplete game as an error.
    ///
    /// # Panics
    ///
    /// Panics if the game is not complete.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        assert!(game.is_complete(), "Cannot compute results for an incomplete game!");

        let all_scores: Vec<Score> = game
            .rounds()
            .flat_map(|round| round.scores().filter_map(|(_, s)| s))
            .collect();
        let non_fifty: Vec<Score> = all_scores
            .iter()
            .copied()
            .filter(|s| *s != MAX_ROUND_SCORE)
            .collect();

        let ordered_players = game.all_players();
        let mut player_results = FxHashMap::default();
        for player in &ordered_players {
            let name = player.name();
            let scores: Vec<Score> = game
                .rounds()
                .filter(|round| round.contains(name))
                .filter_map(|round| round.score(name))
                .collect();
            let losses = game
                .rounds()
                .filter(|round| round.losers().contains(player))
                .count() as u32;

            player_results.insert(
                player.clone(),
                PlayerResult::from_scores(player.clone(), &scores, losses),
            );
        }

        let winner = match game.winners().into_iter().next() {
            Some(winner) => winner,
            None => panic!("Complete game has no remaining player!"),
        };

        trace!(
            game = %game.id(),
            rounds = game.len(),
            scores = all_scores.len(),
            winner = %winner,
            "derived game result"
        );

        Self {
            average_score: mean(&all_scores).unwrap_or(0.0),
            average_non_fifty_score: mean(&non_fifty).unwrap_or(0.0),
            winner,
            losers: game.losers(),
            ordered_players,
            rounds_played: game.len(),
            player_results,
        }
    }

    /// Mean of every score recorded in the game.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        self.average_score
    }

    /// Mean of every score other than 50.
    #[must_use]
    pub fn average_non_fifty_score(&self) -> f64 {
        self.average_non_fifty_score
    }

    /// The last player standing.
    #[must_use]
    pub fn winner(&self) -> &Player {
        &self.winner
    }

    /// Players sharing the highest final total, in playing order.
    #[must_use]
    pub fn losers(&self) -> &[Player] {
        &self.losers
    }

    /// Every player, in playing order.
    #[must_use]
    pub fn ordered_players(&self) -> &[Player] {
        &self.ordered_players
    }

    /// Number of rounds in the game.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Statistics for one player.
    ///
    /// # Panics
    ///
    /// Panics if the player wasn't in the game.
    #[must_use]
    pub fn results_for(&self, player: &str) -> &PlayerResult {
        match self.player_results.get(player) {
            Some(result) => result,
            None => panic!("Invalid player {}!", player),
        }
    }

    /// Per-player statistics in playing order.
    pub fn player_results(&self) -> impl Iterator<Item = &PlayerResult> + '_ {
        self.ordered_players
            .iter()
            .filter_map(|player| self.player_results.get(player))
    }
}

fn mean(scores: &[Score]) -> Option<f64> {
    if scores.is_empty() {
        None
    } else {
        let sum: u64 = scores.iter().map(|s| u64::from(*s)).sum();
        Some(sum as f64 / scores.len() as f64)
    }
}
