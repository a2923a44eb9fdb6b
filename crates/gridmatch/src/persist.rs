//! Snapshot persistence for the match state.
//!
//! The whole state is the persistence unit: it serializes to JSON
//! under a single stable path, so session carry-over (most importantly
//! the leaderboard) survives process restarts. Anything that can hold
//! a keyed blob would do; a file is the smallest thing that does.

use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use gridmatch_engine::MatchState;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// A persisted state snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Snapshot {
    /// When the snapshot was written.
    saved_at: DateTime<Utc>,
    /// The persisted match state.
    state: MatchState,
}

/// Reads and writes match state snapshots under a stable path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store keyed on the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path snapshots live under.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the state as a timestamped JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if serialization or the write fails.
    #[instrument(skip(self, state), fields(path = %self.path.display()))]
    pub fn save(&self, state: &MatchState) -> Result<(), PersistError> {
        let snapshot = Snapshot {
            saved_at: Utc::now(),
            state: state.clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.path, json)?;
        info!("Snapshot saved");
        Ok(())
    }

    /// Loads the persisted state, if a snapshot exists.
    ///
    /// A missing file is not an error: it is the first run, and the
    /// caller falls back to the initial state.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] if the file exists but cannot be read
    /// or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<MatchState>, PersistError> {
        if !self.path.exists() {
            debug!("No snapshot found");
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        let snapshot: Snapshot = serde_json::from_str(&json)?;
        info!(saved_at = %snapshot.saved_at, "Snapshot loaded");
        Ok(Some(snapshot.state))
    }

    /// Loads the persisted state or falls back to the given initial
    /// state, warning instead of failing on a corrupt snapshot.
    #[instrument(skip(self, initial))]
    pub fn load_or(&self, initial: MatchState) -> MatchState {
        match self.load() {
            Ok(Some(state)) => state,
            Ok(None) => initial,
            Err(error) => {
                warn!(%error, "Snapshot unreadable; starting fresh");
                initial
            }
        }
    }
}

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Persistence error: {} at {}:{}", message, file, line)]
pub struct PersistError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl PersistError {
    /// Creates a new persistence error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for PersistError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for PersistError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
