//! End-to-end tests for match progression, scoring, and the leaderboard.

use gridmatch_engine::{
    advance_round, apply, play_cell, reduce, reset_match, reset_round, start_match, Action,
    CellIndex, Mark, MatchState, PlayerSlot, RejectReason, RoundStatus, Transition,
};

fn cell(index: usize) -> CellIndex {
    CellIndex::from_index(index).expect("valid index")
}

fn fresh_match(name_one: &str, name_two: &str) -> MatchState {
    start_match(&MatchState::default(), name_one, name_two)
        .applied()
        .expect("start always applies")
}

fn play_sequence(mut state: MatchState, indices: &[usize]) -> MatchState {
    for &index in indices {
        state = play_cell(&state, cell(index))
            .applied()
            .expect("legal play");
    }
    state
}

#[test]
fn top_row_win_scores_two_and_one() {
    // Ann (X): 0, 1, 2 — Bob (O): 3, 4.
    let state = play_sequence(fresh_match("Ann", "Bob"), &[0, 3, 1, 4, 2]);

    assert_eq!(state.current_round().winning_mark(), Some(Mark::X));
    assert!(state.current_round().is_complete());

    let (ann, bob) = state.players().both().expect("seated");
    assert_eq!(ann.score(), 2);
    assert_eq!(bob.score(), 1);
}

#[test]
fn full_board_without_line_draws_without_scoring() {
    // Final board: X O X / X O O / O X X.
    let state = play_sequence(fresh_match("Ann", "Bob"), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(state.current_round().status(), RoundStatus::Drawn);
    let (ann, bob) = state.players().both().expect("seated");
    assert_eq!(ann.score(), 0);
    assert_eq!(bob.score(), 0);
}

#[test]
fn turn_alternates_until_round_completes() {
    let mut state = fresh_match("Ann", "Bob");
    let expected = [
        PlayerSlot::One,
        PlayerSlot::Two,
        PlayerSlot::One,
        PlayerSlot::Two,
        PlayerSlot::One,
    ];
    for (step, &index) in [4, 0, 8, 2, 6].iter().enumerate() {
        assert_eq!(state.current_round().to_move(), expected[step]);
        state = play_cell(&state, cell(index)).applied().expect("legal");
    }
}

#[test]
fn rejected_plays_leave_state_untouched() {
    let state = play_sequence(fresh_match("Ann", "Bob"), &[0]);

    // Occupied cell.
    match play_cell(&state, cell(0)) {
        Transition::Rejected(RejectReason::CellOccupied(_)) => {}
        other => panic!("expected occupied-cell rejection, got {other:?}"),
    }

    // The absorbing reducer hands back a deep-equal state.
    let replayed = reduce(&state, &Action::PlayCell { cell: cell(0) });
    assert_eq!(replayed, state);
}

#[test]
fn advance_walks_rounds_then_completes_match() {
    let mut state = fresh_match("Ann", "Bob");

    // Ann takes the first round 2-1.
    state = play_sequence(state, &[0, 3, 1, 4, 2]);

    for expected_round in 2..=5 {
        state = advance_round(&state).applied().expect("applies");
        assert_eq!(state.round_number(), expected_round);
        assert!(!state.is_match_complete());
        assert!(!state.current_round().is_complete());
    }

    // Advancing from the final round ends the match instead of starting
    // a sixth round.
    let done = advance_round(&state).applied().expect("applies");
    assert!(done.is_match_complete());
    assert_eq!(done.round_number(), 6);
    assert_eq!(
        done.match_winner().map(|p| p.name().to_string()),
        Some("Ann".to_string())
    );

    // Terminal: further advances reject.
    assert_eq!(
        advance_round(&done).reason(),
        Some(RejectReason::MatchComplete)
    );
}

#[test]
fn tied_scores_leave_match_without_winner() {
    let mut state = fresh_match("Ann", "Bob");
    for _ in 0..5 {
        state = advance_round(&state).applied().expect("applies");
    }
    assert!(state.is_match_complete());
    assert!(state.match_winner().is_none());
}

#[test]
fn reset_round_clears_board_only() {
    let mut state = play_sequence(fresh_match("Ann", "Bob"), &[0, 3, 1, 4, 2]);
    state = advance_round(&state).applied().expect("applies");
    state = play_sequence(state, &[4]);

    let reset = reset_round(&state).applied().expect("applies");
    assert_eq!(reset.round_number(), 2);
    assert!(!reset.current_round().is_complete());
    assert!(reset.current_round().board().is_empty(cell(4)));
    let (ann, bob) = reset.players().both().expect("seated");
    assert_eq!((ann.score(), bob.score()), (2, 1));
}

#[test]
fn reset_match_folds_scores_into_leaderboard() {
    let state = play_sequence(fresh_match("Ann", "Bob"), &[0, 3, 1, 4, 2]);
    let state = reset_match(&state).applied().expect("applies");

    assert!(!state.started());
    assert!(state.players().both().is_none());
    let standings = state.leaderboard().standings();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].name(), "Ann");
    assert_eq!(standings[0].score(), 2);
    assert_eq!(standings[1].name(), "Bob");
    assert_eq!(standings[1].score(), 1);
}

#[test]
fn leaderboard_accumulates_across_matches() {
    let mut state = MatchState::default();

    for _ in 0..2 {
        state = start_match(&state, "Ann", "Bob")
            .applied()
            .expect("applies");
        state = play_sequence(state, &[0, 3, 1, 4, 2]);
        state = reset_match(&state).applied().expect("applies");
    }

    let standings = state.leaderboard().standings();
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].score(), 4);
    assert_eq!(standings[1].score(), 2);
}

#[test]
fn start_match_preserves_leaderboard_only() {
    let state = play_sequence(fresh_match("Ann", "Bob"), &[0, 3, 1, 4, 2]);
    let state = reset_match(&state).applied().expect("applies");
    let state = start_match(&state, "Cay", "Dee")
        .applied()
        .expect("applies");

    assert_eq!(state.leaderboard().len(), 2);
    let (cay, dee) = state.players().both().expect("seated");
    assert_eq!((cay.score(), dee.score()), (0, 0));
    assert_eq!(state.round_number(), 1);
}

#[test]
fn dispatch_covers_all_five_actions() {
    let mut state = MatchState::default();
    let script = [
        Action::StartMatch {
            player_one: "Ann".to_string(),
            player_two: "Bob".to_string(),
        },
        Action::PlayCell { cell: cell(4) },
        Action::ResetRound,
        Action::AdvanceRound,
        Action::ResetMatch,
    ];

    for action in &script {
        match apply(&state, action) {
            Transition::Applied(next) => state = next,
            Transition::Rejected(reason) => panic!("unexpected rejection: {reason}"),
        }
    }

    assert!(!state.started());
    assert_eq!(state.round_number(), 1);
}
