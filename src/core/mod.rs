//! Core types: players, game identity, configuration, errors, RNG.
//!
//! Everything else in the crate is built from these.

pub mod player;
pub mod id;
pub mod config;
pub mod error;
pub mod rng;

pub use player::{Player, PlayerSort};
pub use id::{GameId, ParseGameIdError};
pub use config::{GameConfig, DEFAULT_SCORE_LIMIT, MAX_ROUND_SCORE, MIN_PLAYERS, MIN_SCORE_LIMIT};
pub use error::{ConfigError, GameError, HistoryError, RecordError, RoundError};
pub use rng::ScoreRng;
