//! Results of a finished game.
//!
//! A `GameResult` is a one-shot snapshot: the winner, the players with the
//! worst total, averages across every score, and per-player records.

mod stats;

pub use stats::{GameResult, PlayerResult};
