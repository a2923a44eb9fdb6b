//! Mark balance invariant: X opens and marks alternate.

use super::Invariant;
use crate::types::{MatchState, PlayerSlot, RoundStatus};

/// Invariant: the live board holds a legal mark distribution.
///
/// X always opens, so the X count leads the O count by 0 or 1. While
/// the round is in progress the turn is fully determined by the counts:
/// equal counts put slot one to move, otherwise slot two.
pub struct MarkBalanceInvariant;

impl Invariant<MatchState> for MarkBalanceInvariant {
    fn holds(state: &MatchState) -> bool {
        let round = state.current_round();
        let (x_count, o_count) = round.board().mark_counts();

        if x_count < o_count || x_count - o_count > 1 {
            return false;
        }

        if round.status() == RoundStatus::InProgress {
            let expected = if x_count == o_count {
                PlayerSlot::One
            } else {
                PlayerSlot::Two
            };
            return round.to_move() == expected;
        }

        true
    }

    fn description() -> &'static str {
        "X leads O by at most one mark and the turn matches the counts"
    }
}
