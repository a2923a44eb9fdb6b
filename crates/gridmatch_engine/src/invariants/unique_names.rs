//! Leaderboard name uniqueness invariant.

use super::Invariant;
use crate::types::MatchState;

/// Invariant: at most one leaderboard entry per distinct name.
///
/// Entry names are exact, case-sensitive keys; the fold accumulates
/// into an existing entry rather than appending a duplicate.
pub struct UniqueNamesInvariant;

impl Invariant<MatchState> for UniqueNamesInvariant {
    fn holds(state: &MatchState) -> bool {
        let entries = state.leaderboard().standings();
        entries.iter().enumerate().all(|(i, entry)| {
            entries[i + 1..].iter().all(|other| other.name() != entry.name())
        })
    }

    fn description() -> &'static str {
        "Leaderboard holds at most one entry per distinct name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{play_cell, reset_match, start_match};
    use crate::types::MatchState;
    use crate::CellIndex;

    #[test]
    fn empty_leaderboard_holds() {
        assert!(UniqueNamesInvariant::holds(&MatchState::default()));
    }

    #[test]
    fn repeated_matches_with_same_names_hold() {
        let mut state = MatchState::default();
        for _ in 0..3 {
            state = start_match(&state, "Ann", "Bob")
                .applied()
                .expect("applies");
            for index in [0, 3, 1, 4, 2] {
                state = play_cell(&state, CellIndex::from_index(index).expect("valid"))
                    .applied()
                    .expect("applies");
            }
            state = reset_match(&state).applied().expect("applies");
            assert!(UniqueNamesInvariant::holds(&state));
            assert_eq!(state.leaderboard().len(), 2);
        }
    }
}
