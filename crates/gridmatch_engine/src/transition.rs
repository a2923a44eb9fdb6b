//! Pure transition functions for the match state machine.
//!
//! Every entry point consumes the current state plus an action payload
//! and produces the next state without touching the input. Unmet
//! preconditions reject the action; the caller decides whether a
//! rejection is surfaced or absorbed.

use crate::action::{Action, RejectReason};
use crate::cell::CellIndex;
use crate::types::{Mark, MatchState, Player, PlayerSlot, Round, RoundStatus};
use crate::{contracts, rules};
use tracing::{debug, info, instrument};

/// Points awarded to the player whose mark completed a line.
pub const WIN_POINTS: u32 = 2;

/// Participation points for the losing side of a decisive round.
///
/// Drawn rounds award nothing to either player.
pub const LOSS_POINTS: u32 = 1;

/// Outcome of applying an action: the next state, or the unchanged
/// state's reason for rejecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The action applied; this is the next state.
    Applied(MatchState),
    /// A precondition failed; the caller's state is still current.
    Rejected(RejectReason),
}

impl Transition {
    /// The next state, if the action applied.
    pub fn applied(self) -> Option<MatchState> {
        match self {
            Transition::Applied(state) => Some(state),
            Transition::Rejected(_) => None,
        }
    }

    /// The rejection reason, if the action did not apply.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Transition::Applied(_) => None,
            Transition::Rejected(reason) => Some(*reason),
        }
    }

    /// Checks whether the action applied.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

/// Applies an action to the state, dispatching to the matching
/// transition function.
#[instrument(skip(state, action), fields(action = ?action))]
pub fn apply(state: &MatchState, action: &Action) -> Transition {
    match action {
        Action::StartMatch {
            player_one,
            player_two,
        } => start_match(state, player_one, player_two),
        Action::PlayCell { cell } => play_cell(state, *cell),
        Action::AdvanceRound => advance_round(state),
        Action::ResetRound => reset_round(state),
        Action::ResetMatch => reset_match(state),
    }
}

/// Applies an action, absorbing rejections into the unchanged state.
///
/// This is the reducer shape the store replays: total over its input
/// domain, no error surface.
#[instrument(skip(state, action))]
pub fn reduce(state: &MatchState, action: &Action) -> MatchState {
    match apply(state, action) {
        Transition::Applied(next) => next,
        Transition::Rejected(reason) => {
            debug!(%reason, "Action absorbed as no-op");
            state.clone()
        }
    }
}

/// Seats two players and begins a fresh match.
///
/// Name validation is the caller's concern; the names are taken as
/// given. Only the leaderboard and the configured round total survive
/// from the previous state.
#[instrument(skip(state))]
pub fn start_match(state: &MatchState, player_one: &str, player_two: &str) -> Transition {
    let mut next = state.clone();
    next.players.player_one = Some(Player::new(PlayerSlot::One, player_one));
    next.players.player_two = Some(Player::new(PlayerSlot::Two, player_two));
    next.current_round = Round::fresh();
    next.round_number = 1;
    next.is_match_complete = false;
    next.match_winner = None;
    next.started = true;

    info!(player_one, player_two, "Match started");
    contracts::debug_check_invariants(&next);
    Transition::Applied(next)
}

/// Places the active player's mark in the given cell.
///
/// A decisive placement completes the round and applies scoring with
/// the turn left on the mover; a board-filling placement completes the
/// round as a draw; otherwise the turn flips.
#[instrument(skip(state), fields(cell = %cell))]
pub fn play_cell(state: &MatchState, cell: CellIndex) -> Transition {
    if let Err(reason) = contracts::LegalPlay::check(cell, state) {
        debug!(%reason, "Play rejected");
        return Transition::Rejected(reason);
    }

    let mover_slot = state.current_round.to_move;
    // LegalPlay guarantees the seat is filled.
    let mark = match state.players.get(mover_slot) {
        Some(player) => player.mark(),
        None => return Transition::Rejected(RejectReason::PlayersMissing),
    };

    let mut next = state.clone();
    next.current_round.board.place(cell, mark);

    if let Some(winner) = rules::winning_mark(&next.current_round.board) {
        next.current_round.status = RoundStatus::Won(winner);
        apply_round_scoring(&mut next, winner);
        info!(%winner, round = next.round_number, "Round won");
    } else if rules::is_full(&next.current_round.board) {
        next.current_round.status = RoundStatus::Drawn;
        info!(round = next.round_number, "Round drawn");
    } else {
        next.current_round.to_move = mover_slot.other();
    }

    contracts::debug_check_play(state, &next);
    Transition::Applied(next)
}

/// Moves on to the next round, or completes the match when the final
/// round has been reached.
///
/// Advancing from the final round increments the round number past the
/// configured total, marks the match complete, and names the winner by
/// strictly higher score (a tie leaves no winner). The finished round
/// stays in place rather than resetting to a playable one.
#[instrument(skip(state), fields(round = state.round_number()))]
pub fn advance_round(state: &MatchState) -> Transition {
    if state.is_match_complete || state.round_number > state.total_rounds {
        debug!("Advance rejected: match already complete");
        return Transition::Rejected(RejectReason::MatchComplete);
    }

    let mut next = state.clone();
    next.round_number += 1;

    if next.round_number > next.total_rounds {
        next.is_match_complete = true;
        next.match_winner = decide_match_winner(&next);
        info!(
            winner = ?next.match_winner.as_ref().map(|p| p.name()),
            "Match complete"
        );
    } else {
        next.current_round = Round::fresh();
        debug!(round = next.round_number, "Round advanced");
    }

    contracts::debug_check_invariants(&next);
    Transition::Applied(next)
}

/// Restarts the current round unconditionally.
///
/// Scores, round number, and match completion are untouched.
#[instrument(skip(state))]
pub fn reset_round(state: &MatchState) -> Transition {
    let mut next = state.clone();
    next.current_round = Round::fresh();
    debug!(round = next.round_number, "Round reset");
    Transition::Applied(next)
}

/// Folds the seated players into the leaderboard and returns the state
/// to its not-started shape.
///
/// The leaderboard is the only field carried forward besides the
/// configured round total.
#[instrument(skip(state))]
pub fn reset_match(state: &MatchState) -> Transition {
    let mut leaderboard = state.leaderboard.clone();
    if let Some((player_one, player_two)) = state.players.both() {
        leaderboard.record(player_one);
        leaderboard.record(player_two);
        info!(entries = leaderboard.len(), "Players folded into leaderboard");
    }

    let mut next = MatchState::with_total_rounds(state.total_rounds);
    next.leaderboard = leaderboard;

    contracts::debug_check_invariants(&next);
    Transition::Applied(next)
}

/// Awards round points: the winning mark's player scores
/// [`WIN_POINTS`], the other seat [`LOSS_POINTS`].
fn apply_round_scoring(state: &mut MatchState, winner: Mark) {
    if let (Some(player_one), Some(player_two)) =
        (&mut state.players.player_one, &mut state.players.player_two)
    {
        if player_one.mark() == winner {
            player_one.award(WIN_POINTS);
            player_two.award(LOSS_POINTS);
        } else {
            player_two.award(WIN_POINTS);
            player_one.award(LOSS_POINTS);
        }
    }
}

/// The player with strictly higher score, if any.
fn decide_match_winner(state: &MatchState) -> Option<Player> {
    let (player_one, player_two) = state.players.both()?;
    if player_one.score() > player_two.score() {
        Some(player_one.clone())
    } else if player_two.score() > player_one.score() {
        Some(player_two.clone())
    } else {
        None
    }
}
