//! Match configuration.

use crate::board::{CLASSIC_SIDE, MAX_SIDE};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Whether the engine checks that the moving player owns the turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TurnPolicy {
    /// Any player may claim an empty cell; only occupancy is checked.
    ///
    /// This includes a player seated in neither seat: their moves are
    /// accepted, flip the turn like any other, and can win the match.
    #[default]
    Lenient,
    /// Moves from anyone but the current player are rejected.
    Strict,
}

/// Settings for a match, loadable from TOML.
///
/// ```toml
/// side = 3
/// first_name = "Sami"
/// second_name = "Alex"
/// turn_policy = "strict"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board side length.
    #[serde(default = "default_side")]
    side: usize,

    /// Display name of the first player.
    #[serde(default = "default_first_name")]
    first_name: String,

    /// Display name of the second player.
    #[serde(default = "default_second_name")]
    second_name: String,

    /// Turn-ownership policy.
    #[serde(default)]
    turn_policy: TurnPolicy,
}

fn default_side() -> usize {
    CLASSIC_SIDE
}

fn default_first_name() -> String {
    "player1".to_string()
}

fn default_second_name() -> String {
    "player2".to_string()
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            first_name: default_first_name(),
            second_name: default_second_name(),
            turn_policy: TurnPolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Creates a configuration for the given side length with default names.
    pub fn with_side(side: usize) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    /// Returns a copy using the given turn policy.
    pub fn with_turn_policy(mut self, turn_policy: TurnPolicy) -> Self {
        self.turn_policy = turn_policy;
        self
    }

    /// Returns a copy using the given player names.
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.second_name = second.into();
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.side == 0 {
            return Err(ConfigError::new("Board side must be at least 1"));
        }
        if config.side > MAX_SIDE {
            return Err(ConfigError::new(format!(
                "Board side {} exceeds the maximum of {}",
                config.side, MAX_SIDE
            )));
        }

        debug!(side = config.side, policy = %config.turn_policy, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(side = config.side, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = MatchConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(*config.side(), 3);
        assert_eq!(*config.turn_policy(), TurnPolicy::Lenient);
    }

    #[test]
    fn test_parse_full_config() {
        let config = MatchConfig::from_toml_str(
            r#"
            side = 4
            first_name = "Sami"
            second_name = "Alex"
            turn_policy = "strict"
            "#,
        )
        .unwrap();
        assert_eq!(*config.side(), 4);
        assert_eq!(config.first_name(), "Sami");
        assert_eq!(config.second_name(), "Alex");
        assert_eq!(*config.turn_policy(), TurnPolicy::Strict);
    }

    #[test]
    fn test_zero_side_rejected() {
        let err = MatchConfig::from_toml_str("side = 0").unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_oversized_side_rejected() {
        let err = MatchConfig::from_toml_str("side = 100000").unwrap_err();
        assert!(err.message.contains("exceeds the maximum"));

        let config = MatchConfig::from_toml_str(&format!("side = {MAX_SIDE}")).unwrap();
        assert_eq!(*config.side(), MAX_SIDE);
    }

    #[test]
    fn test_bad_policy_rejected() {
        let err = MatchConfig::from_toml_str("turn_policy = \"whoever\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
