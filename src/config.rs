use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::schema::DEFAULT_SCHEMA_PATH;
use crate::error::ConfigError;
use crate::stats::DEFAULT_SAMPLE_RATE_HZ;

/// Analyzer settings. Every field is optional in the JSON file:
///
/// ```json
/// { "sample_rate_hz": 1000.0, "schema_path": "data/KEYS.csv",
///   "primary_unit": "V", "secondary_unit": "A" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Rate the captures were sampled at; drives the frequency axis.
    pub sample_rate_hz: f64,
    /// Schema resource listing the expected columns.
    pub schema_path: PathBuf,
    /// Unit tag for the first schema column.
    pub primary_unit: String,
    /// Unit tag for the second schema column.
    pub secondary_unit: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            primary_unit: "V".to_string(),
            secondary_unit: "A".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(ConfigError::InvalidSampleRate(self.sample_rate_hz));
        }
        Ok(())
    }
}
