//! Recoverable errors.
//!
//! Contract violations (bad rosters, rounds that don't match the active
//! players, out-of-range indices, unchecked deletes) panic. The variants
//! here are the failures a correct caller still has to handle, plus the
//! validation errors behind those panics for callers checking input first.

use super::config::{MAX_ROUND_SCORE, MIN_PLAYERS, MIN_SCORE_LIMIT};
use super::player::Player;

/// Errors surfaced by the ledger.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Results were requested before only one player remained.
    #[error("game is incomplete")]
    IncompleteGame,

    /// A persisted game failed validation when loaded.
    #[error("invalid game record: {0}")]
    InvalidRecord(#[from] RecordError),

    /// Binary encoding failed.
    #[error("failed to encode game: {0}")]
    Encode(#[source] bincode::Error),

    /// Binary decoding failed.
    #[error("failed to decode game: {0}")]
    Decode(#[source] bincode::Error),
}

/// Problems with a roster or score limit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("game must contain at least {min} players, got {0}", min = MIN_PLAYERS)]
    TooFewPlayers(usize),

    #[error("player names must contain at least 1 character")]
    EmptyName,

    #[error("player names must be unique, {:?} repeats", .0.name())]
    DuplicatePlayer(Player),

    #[error("score limit must be at least {min}, got {0}", min = MIN_SCORE_LIMIT)]
    ScoreLimitTooLow(u32),
}

/// Problems with a single round's contents.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("Round already contains a player named {0}!")]
    DuplicatePlayer(Player),

    #[error("Proposed score {0} must be between 0 and {max}!", max = MAX_ROUND_SCORE)]
    ScoreOutOfRange(u32),

    #[error("Round must contain at least one winner!")]
    NoWinner,

    #[error("Round must contain at least one loser!")]
    NoLoser,
}

/// Problems with a sequence of rounds against a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("round {0} is incomplete")]
    IncompleteRound(usize),

    #[error("round {index} players {round} don't match active players {expected}")]
    PlayerMismatch {
        index: usize,
        round: String,
        expected: String,
    },
}

/// Why a persisted game was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    History(#[from] HistoryError),
}
