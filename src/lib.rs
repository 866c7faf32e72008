//! # five-ledger
//!
//! Scorekeeping engine for Five, a multi-player elimination card game.
//!
//! ## Rules the engine enforces
//!
//! 1. **Rounds**: every player in a round scores 0 to 50. A complete round
//!    has at least one winner (a 0) and at least one player who didn't win.
//!
//! 2. **Elimination**: a player whose total reaches the score limit is out.
//!    Each round covers exactly the players still in when it was played.
//!
//! 3. **History**: the last round can always be corrected. Earlier rounds
//!    can only be deleted or replaced if no later round would have been
//!    played by a different set of players.
//!
//! ## Errors
//!
//! Broken contracts (a round that doesn't fit the game, an unchecked
//! delete, a bad roster) panic; use the `can_*` and `is_*` predicates
//! first. The one failure callers are expected to handle is asking an
//! unfinished game for its result, which returns
//! [`GameError::IncompleteGame`].
//!
//! ## Modules
//!
//! - `core`: Players, game identity, configuration, errors, RNG
//! - `round`: A single scored hand
//! - `game`: The round ledger and its derived state
//! - `result`: End-of-game statistics
//! - `codec`: Binary encoding of games
//! - `sim`: Seeded scripted play

pub mod core;
pub mod round;
pub mod game;
pub mod result;
pub mod codec;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerSort,
    GameId, GameConfig, GameError, ScoreRng,
    ConfigError, HistoryError, RecordError, RoundError,
    DEFAULT_SCORE_LIMIT, MAX_ROUND_SCORE, MIN_SCORE_LIMIT,
};

pub use crate::round::{Round, Score};

pub use crate::game::{Game, GameRecord, TotalScore};

pub use crate::result::{GameResult, PlayerResult};
