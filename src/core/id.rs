//! Game identity.
//!
//! Every edit that changes a game's round history gives the game a new
//! `GameId`. Two games with the same id are guaranteed to describe the
//! same timeline; two games with different ids may or may not.
//!
//! ```
//! use five_ledger::GameId;
//!
//! let id = GameId::fresh();
//! let text = id.to_string();
//! assert_eq!(text.len(), 16);
//! assert_eq!(text.parse::<GameId>().unwrap(), id);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque identity token for one game timeline.
///
/// Displayed and serialized as 16 lowercase hex digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GameId(u64);

impl GameId {
    /// Draw a new random identity from the thread RNG.
    #[must_use]
    pub fn fresh() -> Self {
        Self(rand::random())
    }

    /// Create an id from a raw value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Error returned when a string is not a valid `GameId`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid game id {0:?}: expected 16 hex digits")]
pub struct ParseGameIdError(String);

impl FromStr for GameId {
    type Err = ParseGameIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.len() == 16 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !canonical {
            return Err(ParseGameIdError(s.to_string()));
        }
        u64::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| ParseGameIdError(s.to_string()))
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for GameId {
    type Error = ParseGameIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
