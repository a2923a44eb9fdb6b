//! First-class actions for the match state machine.
//!
//! Actions are the domain events the store dispatches. They carry the
//! full payload of a transition and serialize for logging and replay.

use crate::cell::CellIndex;
use serde::{Deserialize, Serialize};

/// An action dispatched against the match state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Seat two players and begin a fresh match.
    ///
    /// Names arrive already validated by the caller; the state machine
    /// takes them as given.
    StartMatch {
        /// Name for the seat that plays X.
        player_one: String,
        /// Name for the seat that plays O.
        player_two: String,
    },
    /// Place the active player's mark in a cell.
    PlayCell {
        /// The target cell.
        cell: CellIndex,
    },
    /// Move on to the next round, or complete the match after the final
    /// round.
    AdvanceRound,
    /// Restart the current round, keeping scores and round number.
    ResetRound,
    /// Fold players into the leaderboard and return to the not-started
    /// shape.
    ResetMatch,
}

/// Why a transition did not apply.
///
/// Every unmet precondition maps to one reason; the state is returned
/// untouched alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// The current round already reached a terminal state.
    #[display("The current round is already complete")]
    RoundComplete,

    /// The target cell is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(CellIndex),

    /// One or both seats are empty.
    #[display("Both players must be seated before playing")]
    PlayersMissing,

    /// The match already completed; no further rounds exist.
    #[display("The match is already complete")]
    MatchComplete,
}

impl std::error::Error for RejectReason {}
