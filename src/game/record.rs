//! Persisted form of a game.
//!
//! Storage layers round-trip a [`Game`] through a [`GameRecord`]. Field
//! order is part of the contract: roster order is playing order, and round
//! order is history.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ledger::{Game, TotalScore};
use crate::core::{GameConfig, GameError, GameId, Player, RecordError};
use crate::round::Round;

/// Explicit, stable record of a game.
///
/// Rounds serialize as lists of `[player, score]` pairs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Identity of the timeline.
    pub id: GameId,
    /// Roster in playing order.
    pub players: Vec<Player>,
    /// Elimination threshold.
    pub score_limit: TotalScore,
    /// Rounds, oldest first.
    pub rounds: Vec<Round>,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            id: game.id(),
            players: game.all_players(),
            score_limit: game.score_limit(),
            rounds: game.rounds().cloned().collect(),
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = GameError;

    /// Rebuild a game, checking the roster, the limit, and that every
    /// round covers exactly the players active before it.
    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let config = GameConfig {
            players: record.players,
            score_limit: record.score_limit,
        };
        let rounds: Vector<Round> = record.rounds.into_iter().collect();

        let checked = config.validate().map_err(RecordError::from).and_then(|()| {
            Game::validate_history(&config.players, config.score_limit, &rounds)
                .map_err(RecordError::from)
        });
        if let Err(err) = checked {
            warn!(game = %record.id, error = %err, "rejected game record");
            return Err(GameError::InvalidRecord(err));
        }

        Ok(Game::from_parts(record.id, config.players, config.score_limit, rounds))
    }
}
