//! Configuration system for the Secret Santa engine.
//!
//! Load engine configuration from TOML or YAML files to control the
//! lookback window, search budget, and reproducibility without code changes.
//! Configuration is a plain value passed into every engine invocation.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use santa_config::EngineConfig;
//! use std::time::Duration;
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     lookback = 3
//!     random_seed = 7
//!
//!     [termination]
//!     restart_limit = 250
//!     seconds_spent_limit = 2
//! "#).unwrap();
//!
//! assert_eq!(config.lookback, 3);
//! assert_eq!(config.restart_limit(), 250);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(2)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use santa_config::EngineConfig;
//!
//! let config = EngineConfig::load("santa.toml").unwrap_or_default();
//! assert_eq!(config.lookback, 2);
//! ```

use std::path::Path;
use std::time::Duration;

use santa_core::HistoryWindow;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of prior rounds whose pairings may not repeat.
pub const DEFAULT_LOOKBACK: usize = 2;

/// Default number of full restarts before giving up.
pub const DEFAULT_RESTART_LIMIT: u64 = 100;

/// Repair passes per restart, per participant, when not configured.
pub const REPAIR_PASSES_PER_PARTICIPANT: u64 = 10;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EngineConfig {
    /// Number of prior rounds whose pairings are forbidden. Zero disables history.
    #[serde(default = "default_lookback")]
    pub lookback: usize,

    /// Explicit round years to use instead of the lookback window.
    #[serde(default)]
    pub history_rounds: Option<Vec<i32>>,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Run an exact matching search once the randomized budget is spent.
    #[serde(default = "default_true")]
    pub deterministic_fallback: bool,

    /// Refuse to start a round until every active participant has a message.
    #[serde(default)]
    pub require_messages: bool,

    /// Search budget.
    #[serde(default)]
    pub termination: TerminationConfig,
}

fn default_lookback() -> usize {
    DEFAULT_LOOKBACK
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lookback: DEFAULT_LOOKBACK,
            history_rounds: None,
            random_seed: None,
            deterministic_fallback: true,
            require_messages: false,
            termination: TerminationConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks limits that would make every search fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.termination.restart_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "termination.restart_limit must be at least 1".to_string(),
            ));
        }
        if self.termination.seconds_spent_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "termination.seconds_spent_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the lookback window.
    pub fn with_lookback(mut self, lookback: usize) -> Self {
        self.lookback = lookback;
        self
    }

    /// Uses exactly these round years as history.
    pub fn with_history_rounds(mut self, years: Vec<i32>) -> Self {
        self.history_rounds = Some(years);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the maximum number of full restarts.
    ///
    /// Not checked here: zero is rejected by [`validate`](Self::validate),
    /// which the generator runs before searching.
    pub fn with_restart_limit(mut self, limit: u64) -> Self {
        self.termination.restart_limit = Some(limit);
        self
    }

    /// Sets the number of repair passes per restart.
    pub fn with_repair_passes(mut self, passes: u64) -> Self {
        self.termination.repair_passes = Some(passes);
        self
    }

    /// Sets the wall-clock limit. Zero is rejected by [`validate`](Self::validate).
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination.seconds_spent_limit = Some(seconds);
        self
    }

    pub fn with_deterministic_fallback(mut self, enabled: bool) -> Self {
        self.deterministic_fallback = enabled;
        self
    }

    pub fn with_require_messages(mut self, required: bool) -> Self {
        self.require_messages = required;
        self
    }

    /// The history window this configuration selects.
    ///
    /// Explicit rounds win over the lookback; a zero lookback disables history.
    ///
    /// ```
    /// use santa_config::EngineConfig;
    /// use santa_core::HistoryWindow;
    ///
    /// assert_eq!(EngineConfig::new().history_window(), HistoryWindow::Lookback(2));
    /// assert_eq!(
    ///     EngineConfig::new().with_lookback(0).history_window(),
    ///     HistoryWindow::Disabled
    /// );
    /// ```
    pub fn history_window(&self) -> HistoryWindow {
        match &self.history_rounds {
            Some(years) => HistoryWindow::Rounds(years.clone()),
            None if self.lookback == 0 => HistoryWindow::Disabled,
            None => HistoryWindow::Lookback(self.lookback),
        }
    }

    /// Maximum number of full restarts.
    pub fn restart_limit(&self) -> u64 {
        self.termination
            .restart_limit
            .unwrap_or(DEFAULT_RESTART_LIMIT)
    }

    /// Repair passes per restart for a roster of `roster_size` participants.
    pub fn repair_passes(&self, roster_size: usize) -> u64 {
        self.termination
            .repair_passes
            .unwrap_or(roster_size as u64 * REPAIR_PASSES_PER_PARTICIPANT)
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.time_limit()
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of full restarts (default 100).
    pub restart_limit: Option<u64>,

    /// Local repair passes per restart (default roster size × 10).
    pub repair_passes: Option<u64>,

    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.seconds_spent_limit.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests;
