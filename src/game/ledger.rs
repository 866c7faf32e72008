//! The game aggregate.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use tracing::debug;

use super::record::GameRecord;
use crate::core::{
    GameConfig, GameError, GameId, HistoryError, Player, PlayerSort, DEFAULT_SCORE_LIMIT,
};
use crate::result::GameResult;
use crate::round::{Round, Score};

/// A running total.
pub type TotalScore = u32;

/// A game of Five: a fixed roster, a score limit, and the rounds played.
///
/// Everything else (totals, who is still in, who is winning) is derived
/// from the round history on demand.
///
/// Mutating operations come in two flavours: in-place (`add_round`,
/// `delete_round`, `replace_round`) and copy-returning (`with_round`,
/// `without_round`, `by_replacing_round`). Both give the resulting game a
/// new [`GameId`]. Round history is an `im::Vector`, so the copies share
/// structure with the original.
///
/// ```
/// use five_ledger::Game;
///
/// let mut game = Game::new(["Mom", "Dad", "God", "Bro"]);
/// let mut round = game.new_round();
/// round.set_score("Mom", 0);
/// round.set_score("Dad", 0);
/// round.set_score("God", 50);
/// round.set_score("Bro", 0);
/// game.add_round(round);
///
/// assert_eq!(game.total_score("God"), 50);
/// assert_eq!(game.active_players().len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    id: GameId,
    players: Vec<Player>,
    score_limit: TotalScore,
    rounds: Vector<Round>,
}

impl Game {
    /// Create a game with the default score limit of 250.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than two players, a name is empty, or a
    /// name repeats.
    pub fn new<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        Self::with_score_limit(players, DEFAULT_SCORE_LIMIT)
    }

    /// Create a game with a custom score limit.
    ///
    /// # Panics
    ///
    /// Panics on an invalid roster or a score limit below 50.
    pub fn with_score_limit<I, P>(players: I, score_limit: TotalScore) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        Self::from_config(GameConfig::new(players).with_score_limit(score_limit))
    }

    /// Create a game from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("Invalid game configuration: {}", err);
        }
        Self {
            id: GameId::fresh(),
            players: config.players,
            score_limit: config.score_limit,
            rounds: Vector::new(),
        }
    }

    /// Rebuild a game from already-validated parts.
    pub(crate) fn from_parts(
        id: GameId,
        players: Vec<Player>,
        score_limit: TotalScore,
        rounds: Vector<Round>,
    ) -> Self {
        Self {
            id,
            players,
            score_limit,
            rounds,
        }
    }

    // === Identity and configuration ===

    /// Identity of this timeline. Changes whenever round history changes.
    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Cumulative total at which players are eliminated.
    #[must_use]
    pub fn score_limit(&self) -> TotalScore {
        self.score_limit
    }

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        GameConfig::new(self.players.iter().cloned()).with_score_limit(self.score_limit)
    }

    // === Rounds ===

    /// Rounds played so far, oldest first.
    pub fn rounds(&self) -> im::vector::Iter<'_, Round> {
        self.rounds.iter()
    }

    /// Number of rounds played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Whether no rounds have been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// The round at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn round(&self, index: usize) -> &Round {
        self.assert_index(index);
        &self.rounds[index]
    }

    // === Totals and players ===

    /// A player's total across every round they played.
    ///
    /// Players outside the roster have a total of 0.
    #[must_use]
    pub fn total_score(&self, player: &str) -> TotalScore {
        Self::total_over(self.rounds.iter(), player)
    }

    /// `(player, total)` pairs in playing order.
    #[must_use]
    pub fn totals(&self) -> Vec<(Player, TotalScore)> {
        let totals = self.roster_totals(self.rounds.len());
        self.players.iter().cloned().zip(totals).collect()
    }

    /// Every player, in playing order, including eliminated ones.
    #[must_use]
    pub fn all_players(&self) -> Vec<Player> {
        self.players.clone()
    }

    /// Every player, including eliminated ones, in the given order.
    #[must_use]
    pub fn all_players_sorted(&self, sort: PlayerSort) -> Vec<Player> {
        let totals = self.totals();
        sorted(totals, sort)
    }

    /// Players who haven't reached the score limit, in playing order.
    #[must_use]
    pub fn active_players(&self) -> Vec<Player> {
        self.active_players_sorted(PlayerSort::PlayingOrder)
    }

    /// Players who haven't reached the score limit, in the given order.
    #[must_use]
    pub fn active_players_sorted(&self, sort: PlayerSort) -> Vec<Player> {
        sorted(self.active_totals(), sort)
    }

    /// Players who have reached the score limit, in playing order.
    #[must_use]
    pub fn eliminated_players(&self) -> Vec<Player> {
        self.totals()
            .into_iter()
            .filter(|(_, total)| *total >= self.score_limit)
            .map(|(player, _)| player)
            .collect()
    }

    /// Players who were active before round `index` was played.
    ///
    /// `index` may equal `len()`, giving the players for the next round.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[must_use]
    pub fn active_players_as_of(&self, index: usize) -> Vec<Player> {
        assert!(index <= self.rounds.len(), "Invalid index {}!", index);
        self.active_from_totals(&self.roster_totals(index))
    }

    /// Active players sharing the lowest total.
    #[must_use]
    pub fn winners(&self) -> Vec<Player> {
        extreme(&self.active_totals(), false)
    }

    /// Players, eliminated or not, sharing the highest total.
    #[must_use]
    pub fn losers(&self) -> Vec<Player> {
        extreme(&self.totals(), true)
    }

    /// Active players sharing the highest total among those still in.
    #[must_use]
    pub fn active_losers(&self) -> Vec<Player> {
        extreme(&self.active_totals(), true)
    }

    /// Whether exactly one player is left.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.active_players().len() == 1
    }

    /// End-of-game statistics.
    ///
    /// Fails with [`GameError::IncompleteGame`] while more than one player
    /// is still active.
    pub fn result(&self) -> Result<GameResult, GameError> {
        if !self.is_complete() {
            return Err(GameError::IncompleteGame);
        }
        Ok(GameResult::from_game(self))
    }

    // === Turn rotation ===

    /// The player who leads round `index`.
    ///
    /// Play passes one seat along the playing order each round, skipping
    /// players eliminated by the time that round starts. `index` may equal
    /// `len()`, giving the starter of the next round.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[must_use]
    pub fn starting_player(&self, index: usize) -> Player {
        assert!(index <= self.rounds.len(), "Invalid index {}!", index);
        let count = self.players.len();
        let mut totals = vec![0; count];
        let mut seat = 0;

        for i in 1..=index {
            Self::accumulate(&self.players, &mut totals, &self.rounds[i - 1]);
            let alive: Vec<bool> = totals.iter().map(|t| *t < self.score_limit).collect();

            if alive.iter().all(|a| *a) {
                seat = i % count;
            } else {
                seat = (seat + 1) % count;
                while !alive[seat] {
                    seat = (seat + 1) % count;
                }
            }
        }

        self.players[seat].clone()
    }

    // === Building rounds ===

    /// An unscored round for the current active players, in playing order.
    #[must_use]
    pub fn new_round(&self) -> Round {
        Round::new(self.active_players())
    }

    /// A scored round for the current active players.
    ///
    /// # Panics
    ///
    /// Panics if the scores don't form a valid round.
    #[must_use]
    pub fn new_round_with_scores(&self, mut scores: impl FnMut(&Player) -> Score) -> Round {
        let active = self.active_players();
        let entries: Vec<(Player, Score)> = active
            .into_iter()
            .map(|player| {
                let score = scores(&player);
                (player, score)
            })
            .collect();
        Round::from_scores(entries)
    }

    // === Adding rounds ===

    /// Append a round.
    ///
    /// # Panics
    ///
    /// Panics if the round is incomplete or its players aren't exactly the
    /// current active players.
    pub fn add_round(&mut self, round: Round) {
        assert!(round.is_complete(), "Round is incomplete!");
        assert!(
            round.has_same_players(&self.new_round()),
            "Round doesn't have scores for required players"
        );
        self.rounds.push_back(round);
        self.id = GameId::fresh();
        debug!(game = %self.id, rounds = self.rounds.len(), "round added");
    }

    /// Copy of this game with a round appended.
    #[must_use]
    pub fn with_round(&self, round: Round) -> Game {
        let mut game = self.clone();
        game.add_round(round);
        game
    }

    // === Deleting rounds ===

    /// Whether the round at `index` can be removed without rewriting who
    /// was in play for the rounds after it.
    ///
    /// The last round can always be removed.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn can_delete_round(&self, index: usize) -> bool {
        self.assert_index(index);
        if index == self.rounds.len() - 1 {
            return true;
        }
        let mut rounds = self.rounds.clone();
        rounds.remove(index);
        self.is_compatible_history(&rounds)
    }

    /// Remove the round at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `can_delete_round(index)` is false.
    pub fn delete_round(&mut self, index: usize) {
        assert!(
            self.can_delete_round(index),
            "Cannot remove round at index {}! Game would change impossibly. Remove subsequent rounds first.",
            index
        );
        self.rounds.remove(index);
        self.id = GameId::fresh();
        debug!(game = %self.id, index, rounds = self.rounds.len(), "round deleted");
    }

    /// Copy of this game without the round at `index`.
    #[must_use]
    pub fn without_round(&self, index: usize) -> Game {
        let mut game = self.clone();
        game.delete_round(index);
        game
    }

    // === Replacing rounds ===

    /// Whether the round at `index` can be swapped for `round`.
    ///
    /// The replacement must be complete and cover the same players. Unless
    /// it replaces the last round, it must also leave every later round's
    /// players and the current active players unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn can_replace_round(&self, index: usize, round: &Round) -> bool {
        self.assert_index(index);
        if !round.is_complete() || !self.rounds[index].has_same_players(round) {
            return false;
        }
        if index == self.rounds.len() - 1 {
            return true;
        }
        let mut rounds = self.rounds.clone();
        rounds.set(index, round.clone());
        self.is_compatible_history(&rounds)
    }

    /// Replace the round at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `can_replace_round(index, &round)` is false.
    pub fn replace_round(&mut self, index: usize, round: Round) {
        assert!(
            self.can_replace_round(index, &round),
            "Cannot replace round at index {} with provided replacement {}!",
            index,
            round
        );
        self.rounds.set(index, round);
        self.id = GameId::fresh();
        debug!(game = %self.id, index, "round replaced");
    }

    /// Copy of this game with the round at `index` replaced.
    #[must_use]
    pub fn by_replacing_round(&self, index: usize, round: Round) -> Game {
        let mut game = self.clone();
        game.replace_round(index, round);
        game
    }

    // === Snapshots ===

    /// A new game holding only the first `n` rounds of this one.
    ///
    /// # Panics
    ///
    /// Panics if `n > len()`.
    #[must_use]
    pub fn with_first(&self, n: usize) -> Game {
        assert!(n <= self.rounds.len(), "Invalid n {}!", n);
        Self {
            id: GameId::fresh(),
            players: self.players.clone(),
            score_limit: self.score_limit,
            rounds: self.rounds.take(n),
        }
    }

    /// Whether both games have the same roster, limit and rounds,
    /// regardless of identity.
    #[must_use]
    pub fn same_history(&self, other: &Game) -> bool {
        self.players == other.players
            && self.score_limit == other.score_limit
            && self.rounds == other.rounds
    }

    // === Internals ===

    /// Check that each round covers exactly the players active before it.
    pub(crate) fn validate_history(
        players: &[Player],
        score_limit: TotalScore,
        rounds: &Vector<Round>,
    ) -> Result<(), HistoryError> {
        let mut totals = vec![0; players.len()];
        for (index, round) in rounds.iter().enumerate() {
            if !round.is_complete() {
                return Err(HistoryError::IncompleteRound(index));
            }
            let expected = Round::new(
                players
                    .iter()
                    .zip(&totals)
                    .filter(|(_, total)| **total < score_limit)
                    .map(|(player, _)| player.clone()),
            );
            if !round.has_same_players(&expected) {
                return Err(HistoryError::PlayerMismatch {
                    index,
                    round: round.to_string(),
                    expected: expected.to_string(),
                });
            }
            Self::accumulate(players, &mut totals, round);
        }
        Ok(())
    }

    /// A rewritten history is compatible if every round still matches its
    /// active players and the same players are active at the end.
    fn is_compatible_history(&self, rounds: &Vector<Round>) -> bool {
        if Self::validate_history(&self.players, self.score_limit, rounds).is_err() {
            return false;
        }
        let before = self.active_from_totals(&self.roster_totals(self.rounds.len()));
        let mut after = vec![0; self.players.len()];
        for round in rounds {
            Self::accumulate(&self.players, &mut after, round);
        }
        before == self.active_from_totals(&after)
    }

    fn active_totals(&self) -> Vec<(Player, TotalScore)> {
        self.totals()
            .into_iter()
            .filter(|(_, total)| *total < self.score_limit)
            .collect()
    }

    /// Totals for each roster seat over the first `n` rounds.
    fn roster_totals(&self, n: usize) -> Vec<TotalScore> {
        let mut totals = vec![0; self.players.len()];
        for round in self.rounds.iter().take(n) {
            Self::accumulate(&self.players, &mut totals, round);
        }
        totals
    }

    fn accumulate(players: &[Player], totals: &mut [TotalScore], round: &Round) {
        for (player, total) in players.iter().zip(totals.iter_mut()) {
            if round.contains(player.name()) {
                *total += round.score(player.name()).unwrap_or(0);
            }
        }
    }

    fn total_over<'a>(rounds: impl Iterator<Item = &'a Round>, player: &str) -> TotalScore {
        rounds
            .filter(|round| round.contains(player))
            .filter_map(|round| round.score(player))
            .sum::<TotalScore>()
    }

    fn active_from_totals(&self, totals: &[TotalScore]) -> Vec<Player> {
        self.players
            .iter()
            .zip(totals)
            .filter(|(_, total)| **total < self.score_limit)
            .map(|(player, _)| player.clone())
            .collect()
    }

    fn assert_index(&self, index: usize) {
        assert!(index < self.rounds.len(), "Invalid index {}!", index);
    }
}

/// Stable sort of `(player, total)` pairs. Ties keep playing order.
fn sorted(mut totals: Vec<(Player, TotalScore)>, sort: PlayerSort) -> Vec<Player> {
    match sort {
        PlayerSort::PlayingOrder => {}
        PlayerSort::WinningToLosing => totals.sort_by_key(|(_, total)| *total),
        PlayerSort::LosingToWinning => totals.sort_by(|(_, a), (_, b)| b.cmp(a)),
    }
    totals.into_iter().map(|(player, _)| player).collect()
}

/// Players sharing the highest (or lowest) total, in playing order.
fn extreme(totals: &[(Player, TotalScore)], highest: bool) -> Vec<Player> {
    let values = totals.iter().map(|(_, total)| *total);
    let target = if highest { values.max() } else { values.min() };
    match target {
        Some(target) => totals
            .iter()
            .filter(|(_, total)| *total == target)
            .map(|(player, _)| player.clone())
            .collect(),
        None => Vec::new(),
    }
}

impl Index<usize> for Game {
    type Output = Round;

    fn index(&self, index: usize) -> &Self::Output {
        self.round(index)
    }
}

impl<'a> IntoIterator for &'a Game {
    type Item = &'a Round;
    type IntoIter = im::vector::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game {} (limit {})", self.id, self.score_limit)?;
        for (i, round) in self.rounds.iter().enumerate() {
            writeln!(f, "  Round {}: {}", i + 1, round)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family() -> Game {
        Game::new(["Mom", "Dad", "God", "Bro"])
    }

    fn god_round(game: &Game) -> Round {
        let mut round = game.new_round();
        round.set_score("Mom", 0);
        round.set_score("Dad", 0);
        round.set_score("God", 50);
        round.set_score("Bro", 0);
        round
    }

    /// A, B, C with limit 50; B is knocked out by the second round.
    fn knockout() -> Game {
        Game::with_score_limit(["A", "B", "C"], 50)
            .with_round(Round::from_scores([("A", 0), ("B", 30), ("C", 5)]))
            .with_round(Round::from_scores([("A", 0), ("B", 20), ("C", 5)]))
            .with_round(Round::from_scores([("A", 0), ("C", 10)]))
    }

    fn names(players: &[Player]) -> Vec<&str> {
        players.iter().map(Player::name).collect()
    }

    #[test]
    fn test_new_game() {
        let game = family();
        assert_eq!(game.score_limit(), 250);
        assert!(game.is_empty());
        assert_eq!(game.active_players().len(), 4);
        assert!(game.eliminated_players().is_empty());
        assert!(!game.is_complete());
        for player in ["Mom", "Dad", "God", "Bro"] {
            assert_eq!(game.total_score(player), 0);
        }
    }

    #[test]
    fn test_result_of_incomplete_game() {
        assert!(matches!(family().result(), Err(GameError::IncompleteGame)));
    }

    #[test]
    fn test_basic_accrual() {
        let mut game = family();
        let round = god_round(&game);
        for _ in 0..3 {
            game.add_round(round.clone());
        }

        assert_eq!(game.total_score("God"), 150);
        assert_eq!(game.total_score("Mom"), 0);
        assert_eq!(game.total_score("Dad"), 0);
        assert_eq!(game.total_score("Bro"), 0);
        assert_eq!(game.active_players().len(), 4);
    }

    #[test]
    fn test_with_first() {
        let mut game = family();
        let round = god_round(&game);
        for _ in 0..3 {
            game.add_round(round.clone());
        }

        for n in 0..=3 {
            let prefix = game.with_first(n);
            assert_eq!(prefix.len(), n);
            assert_eq!(prefix.total_score("God"), 50 * n as u32);
            assert_eq!(prefix.total_score("Mom"), 0);
        }
        assert!(game.with_first(3).same_history(&game));
    }

    #[test]
    fn test_elimination() {
        let mut game = family();
        let round = god_round(&game);
        for _ in 0..4 {
            game.add_round(round.clone());
        }

        let mut round = game.new_round();
        round.set_score("Mom", 1);
        round.set_score("Dad", 2);
        round.set_score("God", 50);
        round.set_score("Bro", 0);
        game.add_round(round);

        assert_eq!(names(&game.active_players()), vec!["Mom", "Dad", "Bro"]);
        assert_eq!(names(&game.eliminated_players()), vec!["God"]);
        assert_eq!(names(&game.winners()), vec!["Bro"]);
        assert_eq!(names(&game.losers()), vec!["God"]);
        assert_eq!(names(&game.active_losers()), vec!["Dad"]);
        assert_eq!(names(&game.new_round().players().cloned().collect::<Vec<_>>()), vec!["Mom", "Dad", "Bro"]);
    }

    #[test]
    fn test_active_players_as_of() {
        let game = knockout();
        assert_eq!(names(&game.active_players_as_of(0)), vec!["A", "B", "C"]);
        assert_eq!(names(&game.active_players_as_of(2)), vec!["A", "C"]);
        assert_eq!(names(&game.active_players_as_of(3)), vec!["A", "C"]);
    }

    #[test]
    fn test_sorting_keeps_roster_order_on_ties() {
        let game = Game::new(["A", "B", "C", "D"])
            .with_round(Round::from_scores([("A", 10), ("B", 0), ("C", 10), ("D", 3)]));

        assert_eq!(
            names(&game.all_players_sorted(PlayerSort::WinningToLosing)),
            vec!["B", "D", "A", "C"]
        );
        assert_eq!(
            names(&game.all_players_sorted(PlayerSort::LosingToWinning)),
            vec!["A", "C", "D", "B"]
        );
        assert_eq!(
            names(&game.all_players_sorted(PlayerSort::PlayingOrder)),
            vec!["A", "B", "C", "D"]
        );
    }

    #[test]
    fn test_active_sorting_excludes_eliminated() {
        let game = knockout();
        assert_eq!(
            names(&game.active_players_sorted(PlayerSort::LosingToWinning)),
            vec!["C", "A"]
        );
        assert_eq!(names(&game.all_players_sorted(PlayerSort::LosingToWinning)), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_ids_change_with_history() {
        let mut game = family();
        let original = game.id();
        let round = god_round(&game);

        let copy = game.with_round(round.clone());
        assert_eq!(game.id(), original);
        assert!(game.is_empty());
        assert_ne!(copy.id(), original);

        game.add_round(round);
        assert_ne!(game.id(), original);
        assert_ne!(game.id(), copy.id());
        assert!(game.same_history(&copy));
    }

    #[test]
    fn test_starting_player_without_eliminations() {
        let mut game = family();
        let round = god_round(&game);
        for _ in 0..4 {
            game.add_round(round.clone());
        }
        let all = game.all_players();
        for i in 0..=game.len() {
            assert_eq!(game.starting_player(i), all[i % 4]);
        }
    }

    #[test]
    fn test_starting_player_skips_eliminated() {
        let game = Game::with_score_limit(["A", "B", "C"], 50)
            .with_round(Round::from_scores([("A", 0), ("B", 50), ("C", 5)]))
            .with_round(Round::from_scores([("A", 0), ("C", 10)]));

        assert_eq!(game.starting_player(0), "A");
        assert_eq!(game.starting_player(1), "C");
        assert_eq!(game.starting_player(2), "A");
    }

    #[test]
    fn test_starting_player_continues_rotation_after_elimination() {
        let game = Game::with_score_limit(["A", "B", "C", "D"], 50)
            .with_round(Round::from_scores([("A", 0), ("B", 5), ("C", 20), ("D", 5)]))
            .with_round(Round::from_scores([("A", 0), ("B", 5), ("C", 30), ("D", 5)]));

        assert_eq!(game.starting_player(0), "A");
        assert_eq!(game.starting_player(1), "B");
        // C is out before round 2; the deal moves on from B to D.
        assert_eq!(game.starting_player(2), "D");
    }

    #[test]
    fn test_can_delete_last_round() {
        let game = knockout();
        assert!(game.can_delete_round(2));
        let trimmed = game.without_round(2);
        assert_eq!(trimmed.len(), 2);
        assert_ne!(trimmed.id(), game.id());
    }

    #[test]
    fn test_delete_guard() {
        let game = knockout();
        // Without either early round B would still be in, but round 2 skipped B.
        assert!(!game.can_delete_round(0));
        assert!(!game.can_delete_round(1));
    }

    #[test]
    fn test_delete_middle_round_when_history_holds() {
        let game = Game::with_score_limit(["A", "B", "C"], 50)
            .with_round(Round::from_scores([("A", 0), ("B", 10), ("C", 5)]))
            .with_round(Round::from_scores([("A", 0), ("B", 50), ("C", 5)]))
            .with_round(Round::from_scores([("A", 0), ("C", 10)]));

        assert!(game.can_delete_round(0));
        let mut edited = game.clone();
        edited.delete_round(0);
        assert_eq!(edited.len(), 2);
        assert_eq!(edited.total_score("B"), 50);
        assert_eq!(names(&edited.active_players()), vec!["A", "C"]);
        assert_ne!(edited.id(), game.id());
    }

    #[test]
    #[should_panic(expected = "Cannot remove round at index 0")]
    fn test_delete_round_refused() {
        let mut game = knockout();
        game.delete_round(0);
    }

    #[test]
    fn test_replace_requires_same_players() {
        let game = knockout();
        let round = Round::from_scores([("A", 0), ("B", 10)]);
        assert!(!game.can_replace_round(0, &round));
    }

    #[test]
    fn test_replace_requires_complete_round() {
        let game = knockout();
        let round = Round::new(["A", "C"]).with_score("A", 0);
        assert!(!game.can_replace_round(2, &round));
    }

    #[test]
    fn test_replace_last_round_freely() {
        let game = Game::with_score_limit(["A", "B"], 50)
            .with_round(Round::from_scores([("A", 0), ("B", 10)]));
        let replacement = Round::from_scores([("A", 50), ("B", 0)]);

        assert!(game.can_replace_round(0, &replacement));
        let edited = game.by_replacing_round(0, replacement);
        assert_ne!(edited.id(), game.id());
        assert!(edited.is_complete());
        assert_eq!(names(&edited.winners()), vec!["B"]);
    }

    #[test]
    fn test_replace_middle_round() {
        let game = knockout();

        // B still reaches the limit: allowed.
        let harmless = Round::from_scores([("A", 0), ("B", 40), ("C", 1)]);
        assert!(game.can_replace_round(0, &harmless));
        let edited = game.by_replacing_round(0, harmless.clone());
        assert_ne!(edited.id(), game.id());
        assert_eq!(edited.total_score("B"), 60);
        assert_eq!(edited.total_score("C"), 16);

        // B would survive round 1, but round 2 was played without B.
        let rescue = Round::from_scores([("A", 0), ("B", 5), ("C", 1)]);
        assert!(!game.can_replace_round(0, &rescue));

        let mut in_place = game.clone();
        in_place.replace_round(0, harmless);
        assert_ne!(in_place.id(), game.id());
        assert!(in_place.same_history(&edited));
    }

    #[test]
    #[should_panic(expected = "Cannot replace round at index 0")]
    fn test_replace_round_refused() {
        let mut game = knockout();
        game.replace_round(0, Round::from_scores([("A", 0), ("B", 5), ("C", 1)]));
    }

    #[test]
    fn test_new_round_with_scores() {
        let game = knockout();
        let round = game.new_round_with_scores(|p| if p == "A" { 0 } else { 7 });
        assert_eq!(round.score("C"), Some(7));
        assert_eq!(round.len(), 2);
    }

    #[test]
    #[should_panic(expected = "Round doesn't have scores for required players")]
    fn test_add_round_with_eliminated_player() {
        let mut game = knockout();
        game.add_round(Round::from_scores([("A", 0), ("B", 5), ("C", 1)]));
    }

    #[test]
    #[should_panic(expected = "Round is incomplete")]
    fn test_add_incomplete_round() {
        let mut game = family();
        let round = game.new_round().with_score("Mom", 0);
        game.add_round(round);
    }

    #[test]
    #[should_panic(expected = "Invalid index 3")]
    fn test_round_out_of_range() {
        let _ = knockout().round(3);
    }

    #[test]
    #[should_panic(expected = "at least 2 players")]
    fn test_single_player_game() {
        let _ = Game::new(["Solo"]);
    }

    #[test]
    #[should_panic(expected = "score limit must be at least 50")]
    fn test_low_score_limit() {
        let _ = Game::with_score_limit(["A", "B"], 49);
    }

    #[test]
    fn test_index_and_iteration() {
        let game = knockout();
        assert_eq!(game[2].len(), 2);
        let sizes: Vec<usize> = (&game).into_iter().map(Round::len).collect();
        assert_eq!(sizes, vec![3, 3, 2]);
    }

    #[test]
    fn test_display() {
        let game = Game::with_score_limit(["A", "B"], 50)
            .with_round(Round::from_scores([("A", 0), ("B", 10)]));
        let text = game.to_string();
        assert!(text.contains("limit 50"));
        assert!(text.contains("Round 1: [A: 0, B: 10]"));
    }

    #[test]
    fn test_config() {
        let config = knockout().config();
        assert_eq!(config.score_limit, 50);
        assert_eq!(config.players.len(), 3);
    }
}
