//! The game ledger.
//!
//! A `Game` holds a fixed roster, a score limit, and an ordered history of
//! complete rounds. It enforces one structural rule: each round covers
//! exactly the players who were still active when it was played. Edits to
//! history (deleting or replacing a round) are only allowed when they keep
//! that rule true for every later round; the last round can always be
//! edited.
//!
//! - `ledger`: the `Game` aggregate and its derived state
//! - `record`: the persisted `GameRecord` form

mod ledger;
mod record;

pub use ledger::{Game, TotalScore};
pub use record::GameRecord;
