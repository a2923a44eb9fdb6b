//! Pure match state machine for a two-player tic-tac-toe match tracker.
//!
//! A match is a fixed run of rounds between two named players. The
//! state machine owns the whole of it: seating, the live board, turn
//! order, win/draw detection, round scoring, match completion, and the
//! cross-match leaderboard. Every operation is a pure transition
//! `State x Action -> State`; there is no I/O and no hidden mutation.
//!
//! # Example
//!
//! ```
//! use gridmatch_engine::{reduce, Action, CellIndex, MatchState};
//!
//! let state = MatchState::default();
//! let state = reduce(
//!     &state,
//!     &Action::StartMatch {
//!         player_one: "Ann".to_string(),
//!         player_two: "Bob".to_string(),
//!     },
//! );
//! let state = reduce(&state, &Action::PlayCell { cell: CellIndex::Center });
//! assert!(state.started());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod contracts;
mod invariants;
mod leaderboard;
mod rules;
mod transition;
mod types;

pub use action::{Action, RejectReason};
pub use cell::CellIndex;
pub use contracts::{
    CellIsOpen, Contract, LegalPlay, MatchOpen, PlayContract, PlayersSeated, RoundOpen,
};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, MatchInvariants,
    RoundBoundInvariant, UniqueNamesInvariant,
};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use rules::{is_full, winning_mark};
pub use transition::{
    advance_round, apply, play_cell, reduce, reset_match, reset_round, start_match, Transition,
    LOSS_POINTS, WIN_POINTS,
};
pub use types::{
    Board, Cell, Mark, MatchState, Player, PlayerSlot, Players, Round, RoundStatus,
    DEFAULT_TOTAL_ROUNDS,
};
