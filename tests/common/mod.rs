//! Shared helpers for integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use five_ledger::{Game, Round};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// The four-player family game used throughout the scenarios.
#[allow(dead_code)]
pub fn family_game() -> Game {
    Game::new(["Mom", "Dad", "God", "Bro"])
}

/// Mom, Dad and Bro win; God takes 50.
#[allow(dead_code)]
pub fn god_takes_fifty(game: &Game) -> Round {
    game.new_round_with_scores(|p| if p == "God" { 50 } else { 0 })
}
