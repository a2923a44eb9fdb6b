//! Contract-based validation for match transitions.
//!
//! Contracts formalize the Hoare-style reasoning {P} action {Q}:
//! preconditions decide whether an action applies at all, and
//! postconditions verify that an applied transition kept the system
//! invariants.

use crate::action::RejectReason;
use crate::cell::CellIndex;
use crate::invariants::{InvariantSet, InvariantViolation, MatchInvariants};
use crate::types::{Cell, MatchState, PlayerSlot};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for a state
/// transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RejectReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Play preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the current round is still accepting moves.
pub struct RoundOpen;

impl RoundOpen {
    /// Rejects once the round reached a terminal state.
    pub fn check(state: &MatchState) -> Result<(), RejectReason> {
        if state.current_round().is_complete() {
            Err(RejectReason::RoundComplete)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is unoccupied.
pub struct CellIsOpen;

impl CellIsOpen {
    /// Rejects plays into an occupied cell.
    pub fn check(cell: CellIndex, state: &MatchState) -> Result<(), RejectReason> {
        if state.current_round().board().is_empty(cell) {
            Ok(())
        } else {
            Err(RejectReason::CellOccupied(cell))
        }
    }
}

/// Precondition: both seats are filled.
pub struct PlayersSeated;

impl PlayersSeated {
    /// Rejects plays while either seat is empty.
    pub fn check(state: &MatchState) -> Result<(), RejectReason> {
        if state.players().complete() {
            Ok(())
        } else {
            Err(RejectReason::PlayersMissing)
        }
    }
}

/// Composite precondition: a play is legal if the round is open, the
/// cell is free, and both players are seated.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(state))]
    pub fn check(cell: CellIndex, state: &MatchState) -> Result<(), RejectReason> {
        RoundOpen::check(state)?;
        CellIsOpen::check(cell, state)?;
        PlayersSeated::check(state)?;
        Ok(())
    }
}

/// Precondition: the match still has rounds to give out.
pub struct MatchOpen;

impl MatchOpen {
    /// Rejects advances once the match completed.
    pub fn check(state: &MatchState) -> Result<(), RejectReason> {
        if state.is_match_complete() || state.round_number() > state.total_rounds() {
            Err(RejectReason::MatchComplete)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play contract (pre + post)
// ─────────────────────────────────────────────────────────────

/// Contract for cell plays.
///
/// Postconditions on top of the invariant set: scores never shrink,
/// and a cell once set keeps its mark for the rest of the round.
pub struct PlayContract;

impl Contract<MatchState, CellIndex> for PlayContract {
    fn pre(state: &MatchState, cell: &CellIndex) -> Result<(), RejectReason> {
        LegalPlay::check(*cell, state)
    }

    fn post(before: &MatchState, after: &MatchState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match MatchInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !scores_monotonic(before, after) {
            violations.push(InvariantViolation::new(
                "Scores are monotonically non-decreasing within a match",
            ));
        }

        if !cells_preserved(before, after) {
            violations.push(InvariantViolation::new(
                "A cell once set is immutable for the remainder of the round",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Neither player's score decreased between the two states.
fn scores_monotonic(before: &MatchState, after: &MatchState) -> bool {
    [PlayerSlot::One, PlayerSlot::Two].iter().all(|slot| {
        match (before.players().get(*slot), after.players().get(*slot)) {
            (Some(prior), Some(current)) => current.score() >= prior.score(),
            _ => true,
        }
    })
}

/// Every occupied cell kept its mark between the two states.
fn cells_preserved(before: &MatchState, after: &MatchState) -> bool {
    before
        .current_round()
        .board()
        .cells()
        .iter()
        .zip(after.current_round().board().cells())
        .all(|(prior, current)| *prior == Cell::Empty || prior == current)
}

// ─────────────────────────────────────────────────────────────
//  Debug-build assertion hooks
// ─────────────────────────────────────────────────────────────

/// Asserts the play contract's postconditions in debug builds.
pub(crate) fn debug_check_play(before: &MatchState, after: &MatchState) {
    if cfg!(debug_assertions)
        && let Err(violations) = PlayContract::post(before, after)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Postcondition violated");
        }
        debug_assert!(violations.is_empty(), "Play postcondition failed: {violations:?}");
    }
}

/// Asserts the invariant set in debug builds.
pub(crate) fn debug_check_invariants(state: &MatchState) {
    if cfg!(debug_assertions)
        && let Err(violations) = MatchInvariants::check_all(state)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariant failed: {violations:?}");
    }
}
