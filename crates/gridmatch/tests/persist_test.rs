//! Tests for snapshot persistence.

use gridmatch::SnapshotStore;
use gridmatch_engine::{reduce, Action, CellIndex, MatchState};
use tempfile::tempdir;

fn played_state() -> MatchState {
    let state = reduce(
        &MatchState::default(),
        &Action::StartMatch {
            player_one: "Ann".to_string(),
            player_two: "Bob".to_string(),
        },
    );
    reduce(
        &state,
        &Action::PlayCell {
            cell: CellIndex::Center,
        },
    )
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("temp dir");
    let store = SnapshotStore::new(dir.path().join("state.json"));

    let state = played_state();
    store.save(&state).expect("save");

    let loaded = store.load().expect("load").expect("snapshot exists");
    assert_eq!(loaded, state);
}

#[test]
fn missing_snapshot_loads_as_none() {
    let dir = tempdir().expect("temp dir");
    let store = SnapshotStore::new(dir.path().join("absent.json"));
    assert!(store.load().expect("load").is_none());
}

#[test]
fn load_or_falls_back_to_initial_state() {
    let dir = tempdir().expect("temp dir");
    let store = SnapshotStore::new(dir.path().join("absent.json"));

    let state = store.load_or(MatchState::with_total_rounds(3));
    assert_eq!(state.total_rounds(), 3);
    assert!(!state.started());
}

#[test]
fn corrupt_snapshot_errors_on_load_but_not_load_or() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("state.json");
    std::fs::write(&path, "not json").expect("write");

    let store = SnapshotStore::new(&path);
    assert!(store.load().is_err());

    let state = store.load_or(MatchState::default());
    assert!(!state.started());
}

#[test]
fn leaderboard_survives_the_round_trip() {
    let dir = tempdir().expect("temp dir");
    let store = SnapshotStore::new(dir.path().join("state.json"));

    let mut state = played_state();
    // Ann completes the middle column, then the match folds away so
    // only the ledger is left.
    for index in [0, 1, 3, 7] {
        state = reduce(
            &state,
            &Action::PlayCell {
                cell: CellIndex::from_index(index).expect("valid"),
            },
        );
    }
    let state = reduce(&state, &Action::ResetMatch);
    store.save(&state).expect("save");

    let loaded = store.load().expect("load").expect("snapshot exists");
    assert_eq!(loaded.leaderboard().len(), state.leaderboard().len());
    assert_eq!(loaded, state);
}
