//! Cross-match leaderboard: cumulative scores keyed by player name.

use crate::types::{Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player snapshot on the leaderboard.
///
/// Entries are keyed by exact name and never removed; folding the same
/// name in again adds to the existing score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    name: String,
    mark: Mark,
    score: u32,
}

impl LeaderboardEntry {
    /// The entry's name (exact, case-sensitive key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark the player held when first recorded.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Cumulative score across matches.
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// Score ledger accumulated across matches, sorted descending by score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Folds a player's match score into the ledger.
    ///
    /// An entry with the same exact name accumulates; otherwise a new
    /// entry is appended. The ledger is then re-sorted descending by
    /// score with a stable sort, so equal scores keep their relative
    /// order.
    #[instrument(skip(self, player), fields(name = %player.name(), score = player.score()))]
    pub fn record(&mut self, player: &Player) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name == player.name())
        {
            Some(entry) => {
                entry.score += player.score();
                debug!(total = entry.score, "Accumulated into existing entry");
            }
            None => {
                self.entries.push(LeaderboardEntry {
                    name: player.name().to_string(),
                    mark: player.mark(),
                    score: player.score(),
                });
                debug!("Appended new entry");
            }
        }

        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Entries in standing order (highest score first).
    pub fn standings(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Number of distinct names recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether no player has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
