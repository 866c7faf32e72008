//! Rounds: one scored hand each.
//!
//! A `Round` is built unscored from a roster (usually via
//! `Game::new_round`), filled in score by score, and committed to a game
//! once complete. Games never mutate rounds they hold; corrections swap in
//! a whole new `Round`.

mod scorecard;

pub use scorecard::{Round, RoundEntries, Score};
