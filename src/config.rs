//! Scheduler configuration.
//!
//! Loaded from TOML. Every field has a default, so an empty document is a
//! valid configuration:
//!
//! ```toml
//! default_strategy = "greedy"
//!
//! [demo]
//! enabled = true
//! min_items = 10
//! completed = 20
//! pending = 15
//! seed = 42
//! ```
//!
//! Slot capacity is deliberately absent: it is the fixed
//! [`CAPACITY`](crate::models::CAPACITY).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ScheduleError};
use crate::strategy::DEFAULT_STRATEGY;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Strategy key selected at startup.
    pub default_strategy: String,
    /// Demo data seeding.
    pub demo: DemoConfig,
}

/// Demo data seeding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Seed at startup.
    pub enabled: bool,
    /// Seeding only happens when the store holds fewer items than this.
    pub min_items: usize,
    /// Number of completed history items to create.
    pub completed: usize,
    /// Number of pending items to create.
    pub pending: usize,
    /// RNG seed for reproducible data. `None` = entropy.
    pub seed: Option<u64>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            default_strategy: DEFAULT_STRATEGY.to_string(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_items: 10,
            completed: 20,
            pending: 15,
            seed: None,
        }
    }
}

impl SchedulerConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ScheduleError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_is_default() {
        let config = SchedulerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SchedulerConfig::default());
        assert_eq!(config.default_strategy, "greedy");
        assert!(!config.demo.enabled);
    }

    #[test]
    fn test_partial_override() {
        let config = SchedulerConfig::from_toml_str(
            r#"
            default_strategy = "edf"

            [demo]
            enabled = true
            seed = 7
            "#,
        )
        .unwrap();
        assert_eq!(config.default_strategy, "edf");
        assert!(config.demo.enabled);
        assert_eq!(config.demo.seed, Some(7));
        assert_eq!(config.demo.pending, 15);
    }

    #[test]
    fn test_malformed() {
        let err = SchedulerConfig::from_toml_str("default_strategy = 5").unwrap_err();
        assert!(matches!(err, ScheduleError::Config(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_strategy = \"fcfs\"").unwrap();

        let config = SchedulerConfig::load(file.path()).unwrap();
        assert_eq!(config.default_strategy, "fcfs");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SchedulerConfig::load("/nonexistent/u-sequencing.toml").unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = SchedulerConfig::default();
        config.demo.seed = Some(99);
        let text = config.to_toml_string().unwrap();
        assert_eq!(SchedulerConfig::from_toml_str(&text).unwrap(), config);
    }
}
