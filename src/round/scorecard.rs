//! A single scored hand.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use crate::core::{Player, RoundError, MAX_ROUND_SCORE};

/// A player's score in one round.
pub type Score = u32;

/// Score slots for a round, in playing order. Most tables seat six or fewer.
type Slots = SmallVec<[(Player, Option<Score>); 6]>;

/// Persisted form of a round: `(player, score)` pairs in playing order,
/// `None` for players without a score yet.
pub type RoundEntries = Vec<(Player, Option<Score>)>;

/// One hand of Five.
///
/// Every player in the round is either unscored or has a score in
/// `0..=50`. Once every player has a score the round is *complete*, and a
/// complete round always has at least one winner (a `0`) and at least one
/// player who didn't win.
///
/// ```
/// use five_ledger::{Player, Round};
///
/// let mut round = Round::new(["Mom", "Dad", "God"]);
/// round.set_score("Mom", 0);
/// round.set_score("Dad", 12);
/// assert!(!round.is_complete());
///
/// round.set_score("God", 50);
/// assert!(round.is_complete());
/// assert_eq!(round.winners(), vec![Player::from("Mom")]);
/// assert_eq!(round.losers(), vec![Player::from("God")]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RoundEntries", into = "RoundEntries")]
pub struct Round {
    slots: Slots,
}

impl Round {
    /// Create a round where every player is unscored.
    ///
    /// # Panics
    ///
    /// Panics if a player appears twice.
    pub fn new<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Player>,
    {
        let mut slots = Slots::new();
        for player in players {
            let player = player.into();
            assert!(
                !slots.iter().any(|(p, _)| *p == player),
                "Round already contains a player named {}!",
                player
            );
            slots.push((player, None));
        }
        Self { slots }
    }

    /// Create a fully scored round.
    ///
    /// # Panics
    ///
    /// Panics if a player appears twice, a score is above 50, or a
    /// non-empty round lacks a winner or a non-winner.
    pub fn from_scores<I, P>(scores: I) -> Self
    where
        I: IntoIterator<Item = (P, Score)>,
        P: Into<Player>,
    {
        let entries: RoundEntries = scores.into_iter().map(|(p, s)| (p.into(), Some(s))).collect();
        match Self::try_from(entries) {
            Ok(round) => round,
            Err(err) => panic!("{}", err),
        }
    }

    /// The players in this round, in playing order.
    pub fn players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.slots.iter().map(|(p, _)| p)
    }

    /// `(player, score)` pairs in playing order.
    pub fn scores(&self) -> impl Iterator<Item = (&Player, Option<Score>)> + '_ {
        self.slots.iter().map(|(p, s)| (p, *s))
    }

    /// Number of players in the round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the round has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether a player takes part in this round.
    #[must_use]
    pub fn contains(&self, player: &str) -> bool {
        self.position(player).is_some()
    }

    /// Whether both rounds cover the same players, ignoring order.
    #[must_use]
    pub fn has_same_players(&self, other: &Round) -> bool {
        self.len() == other.len() && other.players().all(|p| self.contains(p.name()))
    }

    /// Whether every player has a score.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|(_, s)| s.is_some())
    }

    /// Whether the round is complete and has a winner and a non-winner.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_complete() && check_shape(self.slots.iter().map(|(_, s)| *s)).is_ok()
    }

    /// A player's score, or `None` if they haven't been scored yet.
    ///
    /// # Panics
    ///
    /// Panics if the player isn't in the round.
    #[must_use]
    pub fn score(&self, player: &str) -> Option<Score> {
        self.slots[self.expect_position(player)].1
    }

    /// Set a player's score.
    ///
    /// # Panics
    ///
    /// Panics if the player isn't in the round, the score is above 50, or
    /// the round becomes complete without a winner and a non-winner.
    pub fn set_score(&mut self, player: &str, score: Score) {
        assert!(
            score <= MAX_ROUND_SCORE,
            "Proposed score {} must be between 0 and {}!",
            score,
            MAX_ROUND_SCORE
        );
        let index = self.expect_position(player);

        let proposed = self
            .slots
            .iter()
            .enumerate()
            .map(|(i, (_, s))| if i == index { Some(score) } else { *s });
        if proposed.clone().all(|s| s.is_some()) {
            if let Err(err) = check_shape(proposed) {
                panic!("{}", err);
            }
        }

        self.slots[index].1 = Some(score);
    }

    /// Copy of this round with a player's score set.
    #[must_use]
    pub fn with_score(&self, player: &str, score: Score) -> Round {
        let mut round = self.clone();
        round.set_score(player, score);
        round
    }

    /// Clear a player's score.
    ///
    /// # Panics
    ///
    /// Panics if the player isn't in the round.
    pub fn remove_score(&mut self, player: &str) {
        let index = self.expect_position(player);
        self.slots[index].1 = None;
    }

    /// Copy of this round with a player's score cleared.
    #[must_use]
    pub fn without_score(&self, player: &str) -> Round {
        let mut round = self.clone();
        round.remove_score(player);
        round
    }

    /// Clear every score.
    pub fn erase_scores(&mut self) {
        for (_, score) in &mut self.slots {
            *score = None;
        }
    }

    /// Copy of this round with no scores.
    #[must_use]
    pub fn without_scores(&self) -> Round {
        let mut round = self.clone();
        round.erase_scores();
        round
    }

    /// Highest score in a complete round.
    ///
    /// # Panics
    ///
    /// Panics if the round is incomplete or empty.
    #[must_use]
    pub fn max_score(&self) -> Score {
        self.assert_complete();
        self.slots
            .iter()
            .filter_map(|(_, s)| *s)
            .max()
            .expect("Round has no players!")
    }

    /// Players who scored the round minimum (always `0`), in playing order.
    ///
    /// # Panics
    ///
    /// Panics if the round is incomplete.
    #[must_use]
    pub fn winners(&self) -> Vec<Player> {
        self.assert_complete();
        self.players_scoring(0)
    }

    /// Players who scored the round maximum, in playing order.
    ///
    /// # Panics
    ///
    /// Panics if the round is incomplete.
    #[must_use]
    pub fn losers(&self) -> Vec<Player> {
        let max = self.max_score();
        self.players_scoring(max)
    }

    fn players_scoring(&self, target: Score) -> Vec<Player> {
        self.slots
            .iter()
            .filter(|(_, s)| *s == Some(target))
            .map(|(p, _)| p.clone())
            .collect()
    }

    fn assert_complete(&self) {
        assert!(self.is_complete(), "Round is incomplete!");
    }

    fn position(&self, player: &str) -> Option<usize> {
        self.slots.iter().position(|(p, _)| p.name() == player)
    }

    fn expect_position(&self, player: &str) -> usize {
        match self.position(player) {
            Some(index) => index,
            None => panic!("Round does not contain a player named {}!", player),
        }
    }
}

/// Win/lose shape of a scored round: at least one `0`, not all `0`.
fn check_shape(scores: impl Iterator<Item = Option<Score>>) -> Result<(), RoundError> {
    let (zeroes, len) = scores.fold((0, 0), |(zeroes, len), s| {
        (zeroes + usize::from(s == Some(0)), len + 1)
    });
    if zeroes == 0 {
        return Err(RoundError::NoWinner);
    }
    if zeroes == len {
        return Err(RoundError::NoLoser);
    }
    Ok(())
}

impl TryFrom<RoundEntries> for Round {
    type Error = RoundError;

    fn try_from(entries: RoundEntries) -> Result<Self, Self::Error> {
        let mut slots = Slots::with_capacity(entries.len());
        for (player, score) in entries {
            if slots.iter().any(|(p, _)| *p == player) {
                return Err(RoundError::DuplicatePlayer(player));
            }
            if let Some(score) = score {
                if score > MAX_ROUND_SCORE {
                    return Err(RoundError::ScoreOutOfRange(score));
                }
            }
            slots.push((player, score));
        }
        let round = Self { slots };
        if !round.is_empty() && round.is_complete() {
            check_shape(round.slots.iter().map(|(_, s)| *s))?;
        }
        Ok(round)
    }
}

impl From<Round> for RoundEntries {
    fn from(round: Round) -> Self {
        round.slots.into_vec()
    }
}

impl Index<&str> for Round {
    type Output = Option<Score>;

    fn index(&self, player: &str) -> &Self::Output {
        &self.slots[self.expect_position(player)].1
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, (player, score)) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match score {
                Some(score) => write!(f, "{}: {}", player, score)?,
                None => write!(f, "{}: -", player)?,
            }
        }
        f.write_str("]")
    }
}
