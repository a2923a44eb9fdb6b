//! Round number bound invariant.

use super::Invariant;
use crate::types::MatchState;

/// Invariant: the round number stays within the configured total.
///
/// The only state past the total is the transient `total + 1` reached
/// by the advance that completes the match, so `round_number > total`
/// and `is_match_complete` imply each other.
pub struct RoundBoundInvariant;

impl Invariant<MatchState> for RoundBoundInvariant {
    fn holds(state: &MatchState) -> bool {
        let n = state.round_number();
        let total = state.total_rounds();

        if n < 1 || n > total + 1 {
            return false;
        }

        (n > total) == state.is_match_complete()
    }

    fn description() -> &'static str {
        "Round number is within the total, exceeding it only in the completed match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{advance_round, start_match};
    use crate::types::MatchState;

    #[test]
    fn fresh_state_holds() {
        assert!(RoundBoundInvariant::holds(&MatchState::default()));
    }

    #[test]
    fn holds_through_full_match() {
        let mut state = start_match(&MatchState::default(), "Ann", "Bob")
            .applied()
            .expect("applies");
        for _ in 0..5 {
            state = advance_round(&state).applied().expect("applies");
            assert!(RoundBoundInvariant::holds(&state));
        }
        assert!(state.is_match_complete());
    }

    #[test]
    fn overshoot_without_completion_violates() {
        let mut state = MatchState::default();
        state.round_number = state.total_rounds + 1;
        assert!(!RoundBoundInvariant::holds(&state));
    }

    #[test]
    fn completion_within_bound_violates() {
        let mut state = MatchState::default();
        state.is_match_complete = true;
        assert!(!RoundBoundInvariant::holds(&state));
    }
}
