//! Configuration management for the recognition runner.
//!
//! Only the surroundings of the recognizers are configurable. Classification
//! thresholds are fixed constants (see [`crate::constants`]).

use crate::{constants::DEFAULT_MAX_HANDS, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hand tracking configuration
    pub tracking: TrackingConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Hand tracking limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Maximum number of hands tracked at the same time
    pub max_hands: usize,
}

/// Output format of recognized labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One tab separated line per frame
    #[default]
    Text,
    /// A YAML list of records
    Yaml,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Omit frames in which nothing was recognized
    pub skip_idle: bool,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            max_hands: DEFAULT_MAX_HANDS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.tracking.max_hands == 0 {
            return Err(Error::ConfigError(
                "Maximum number of hands must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Recognition Configuration

# Hand tracking
tracking:
  max_hands: 2

# Output
output:
  format: "text"
  skip_idle: false
"#;
