//! Compact binary encoding of games.
//!
//! Uses `bincode` over the same [`GameRecord`] layout as the serde form.
//! Decoding reads the record first and validates it second, so corrupt
//! bytes and impossible games fail differently.
//!
//! ```
//! use five_ledger::{codec, Game};
//!
//! let game = Game::new(["Mom", "Dad"]);
//! let bytes = codec::encode(&game).unwrap();
//! let restored = codec::decode(&bytes).unwrap();
//! assert_eq!(restored, game);
//! ```

use crate::core::GameError;
use crate::game::{Game, GameRecord};

/// Encode a game to bytes.
pub fn encode(game: &Game) -> Result<Vec<u8>, GameError> {
    bincode::serialize(game).map_err(GameError::Encode)
}

/// Decode a game from bytes produced by [`encode`].
///
/// Bytes that don't form a record fail with [`GameError::Decode`]. A record
/// describing an impossible game fails with [`GameError::InvalidRecord`].
pub fn decode(bytes: &[u8]) -> Result<Game, GameError> {
    let record: GameRecord = bincode::deserialize(bytes).map_err(GameError::Decode)?;
    Game::try_from(record)
}
