//! Player identification and ordering.
//!
//! ## Player
//!
//! Opaque, non-empty name. Two players in the same roster never share a name.
//!
//! ## PlayerSort
//!
//! Orderings used when listing players: the fixed playing order, or by
//! running total in either direction.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A player, identified by name.
///
/// Names are compared exactly; `"Mom"` and `"mom"` are different players.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(String);

impl Player {
    /// Create a player from a name.
    ///
    /// ```
    /// use five_ledger::Player;
    ///
    /// let mom = Player::new("Mom");
    /// assert_eq!(mom.name(), "Mom");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether the name is usable in a roster (at least one character).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Player {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Player {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Player {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Player {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sorting options for a list of players.
///
/// Score sorts are stable: players with equal totals keep their
/// playing order relative to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSort {
    /// The order in which the players play.
    #[default]
    PlayingOrder,
    /// Lowest total first.
    WinningToLosing,
    /// Highest total first.
    LosingToWinning,
}
