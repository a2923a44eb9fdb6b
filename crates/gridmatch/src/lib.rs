//! Gridmatch library - the process around the match state machine.
//!
//! The pure transitions live in [`gridmatch_engine`]; this crate wraps
//! them in everything a running session needs:
//!
//! - **Store**: the single mutable cell actions dispatch through
//! - **Setup**: player name validation ahead of `StartMatch`
//! - **Config**: the configured round total, loaded from TOML
//! - **Persist**: JSON state snapshots under a stable path

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod persist;
mod setup;
mod store;

pub use config::{ConfigError, MatchConfig};
pub use persist::{PersistError, SnapshotStore};
pub use setup::{validate_names, SetupError, MAX_NAME_LEN, MIN_NAME_LEN};
pub use store::{MatchStore, Observer};
