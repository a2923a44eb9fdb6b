//! Match configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridmatch_engine::{MatchState, DEFAULT_TOTAL_ROUNDS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a match session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Rounds played per match.
    #[serde(default = "default_total_rounds")]
    total_rounds: u32,
}

fn default_total_rounds() -> u32 {
    DEFAULT_TOTAL_ROUNDS
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(total_rounds = config.total_rounds, "Config loaded");
        Ok(config)
    }

    /// The not-started state this configuration boots into.
    pub fn initial_state(&self) -> MatchState {
        MatchState::with_total_rounds(self.total_rounds)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_rounds: default_total_rounds(),
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
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
