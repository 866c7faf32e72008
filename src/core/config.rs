//! Game configuration.
//!
//! A game is configured once, at creation:
//! - the roster, in playing order
//! - the score limit at which players are eliminated
//!
//! Neither can change afterwards; "changing" them means building a new game.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Player};
use crate::game::Game;

/// Score limit used when none is given.
pub const DEFAULT_SCORE_LIMIT: u32 = 250;

/// Smallest allowed score limit.
pub const MIN_SCORE_LIMIT: u32 = 50;

/// Highest score a player can take in a single round.
pub const MAX_ROUND_SCORE: u32 = 50;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Complete game configuration.
///
/// ```
/// use five_ledger::GameConfig;
///
/// let game = GameConfig::new(["Mom", "Dad", "God", "Bro"])
///     .with_score_limit(300)
///     .build();
///
/// assert_eq!(game.score_limit(), 300);
/// assert_eq!(game.all_players().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Players in playing order.
    pub players: Vec<Player>,

    /// Cumulative total at which a player is eliminated.
    pub score_limit: u32,
}

impl GameConfig {
    /// Create a configuration with the default score limit.
    pub fn new<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            score_limit: DEFAULT_SCORE_LIMIT,
        }
    }

    /// Set the score limit.
    #[must_use]
    pub fn with_score_limit(mut self, score_limit: u32) -> Self {
        self.score_limit = score_limit;
        self
    }

    /// Append a player to the end of the playing order.
    #[must_use]
    pub fn with_player(mut self, player: impl Into<Player>) -> Self {
        self.players.push(player.into());
        self
    }

    /// Check the configuration, describing the first problem found.
    ///
    /// Callers validating user input should use this before `build`,
    /// which treats an invalid configuration as a programming error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.players.len()));
        }
        if self.players.iter().any(|p| !p.is_valid()) {
            return Err(ConfigError::EmptyName);
        }
        for (i, player) in self.players.iter().enumerate() {
            if self.players[..i].contains(player) {
                return Err(ConfigError::DuplicatePlayer(player.clone()));
            }
        }
        if self.score_limit < MIN_SCORE_LIMIT {
            return Err(ConfigError::ScoreLimitTooLow(self.score_limit));
        }
        Ok(())
    }

    /// Whether `validate` would succeed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build a new game with an empty history.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    #[must_use]
    pub fn build(self) -> Game {
        Game::from_config(self)
    }
}
