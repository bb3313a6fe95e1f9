//! Configuration schema for the `yz` tools.
//!
//! Every section is optional in the YAML file; missing sections and fields take defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::category::Category;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("scoring.categories must list at least one category")]
    EmptyCategories,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Dice input handling.
    #[serde(default)]
    pub dice: DiceConfig,
    /// Which categories to report.
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// Event log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dice input configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiceConfig {
    /// If true, reject faces outside 1..=6 when building rolls from user input.
    #[serde(default = "default_validate_faces")]
    pub validate_faces: bool,
}

fn default_validate_faces() -> bool {
    true
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            validate_faces: default_validate_faces(),
        }
    }
}

/// Scoring report configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Categories reported when none is requested explicitly, in output order.
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

fn default_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

/// NDJSON event log configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Append score events to this file. If None, no events are written.
    #[serde(default)]
    pub events_path: Option<String>,
    /// Flush after this many lines (0 = only on exit).
    #[serde(default)]
    pub flush_every_lines: u64,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::load_with_bytes(path)?.0)
    }

    /// Load configuration from a YAML file, also returning the raw file bytes
    /// (for hashing into event logs).
    pub fn load_with_bytes<P: AsRef<Path>>(path: P) -> Result<(Self, Vec<u8>), ConfigError> {
        let bytes = std::fs::read(path)?;
        let config: Config = serde_yaml::from_slice(&bytes)?;
        config.validate()?;
        Ok((config, bytes))
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.categories.is_empty() {
            return Err(ConfigError::EmptyCategories);
        }
        Ok(())
    }
}
