//! Player setup validation.
//!
//! Name rules are a presentation concern: the state machine takes
//! whatever names it is handed, so every entry path runs them through
//! [`validate_names`] before dispatching a start.

use gridmatch_engine::PlayerSlot;
use tracing::{debug, instrument};

/// Minimum name length after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// Maximum name length after trimming.
pub const MAX_NAME_LEN: usize = 20;

/// Why a pair of names cannot start a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// The name for the given seat is empty after trimming.
    #[display("Player {} name is required", _0.id())]
    NameRequired(PlayerSlot),

    /// The name for the given seat is shorter than [`MIN_NAME_LEN`].
    #[display("Player {} name must be at least {} characters", _0.id(), MIN_NAME_LEN)]
    NameTooShort(PlayerSlot),

    /// The name for the given seat is longer than [`MAX_NAME_LEN`].
    #[display("Player {} name must be at most {} characters", _0.id(), MAX_NAME_LEN)]
    NameTooLong(PlayerSlot),

    /// The two names are the same ignoring case.
    #[display("Player names must be different")]
    NamesMatch,
}

impl std::error::Error for SetupError {}

/// Validates and normalizes a pair of player names.
///
/// Both names are trimmed; each must be non-empty, within the length
/// bounds, and the pair must differ case-insensitively. Returns the
/// trimmed names ready for `StartMatch`.
#[instrument]
pub fn validate_names(name_one: &str, name_two: &str) -> Result<(String, String), SetupError> {
    let name_one = validate_name(PlayerSlot::One, name_one)?;
    let name_two = validate_name(PlayerSlot::Two, name_two)?;

    if name_one.to_lowercase() == name_two.to_lowercase() {
        debug!("Names collide ignoring case");
        return Err(SetupError::NamesMatch);
    }

    Ok((name_one, name_two))
}

fn validate_name(slot: PlayerSlot, raw: &str) -> Result<String, SetupError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(SetupError::NameRequired(slot));
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(SetupError::NameTooShort(slot));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(SetupError::NameTooLong(slot));
    }
    Ok(name.to_string())
}
