use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::batch::format::OutputFormat;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Settings for a batch run
///
/// Loaded from an optional JSON file; missing fields take their defaults and
/// command-line flags override whatever the file says.
///
/// ```json
/// { "threads": 4, "format": "tsv", "abort_on_invalid": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Worker threads; `None` uses one per logical CPU
    pub threads: Option<usize>,

    /// Output encoding
    pub format: OutputFormat,

    /// Abort similarity-family batches on a row that is not clean after
    /// normalization. When off, such rows are written with their sentinel.
    pub abort_on_invalid: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            threads: None,
            format: OutputFormat::Text,
            abort_on_invalid: true,
        }
    }
}

impl BatchConfig {
    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadError` if the file cannot be read or
    /// `ConfigError::ParseError` if it is not a valid config.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse settings from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` on malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
