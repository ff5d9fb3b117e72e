use std::path::PathBuf;
use std::str::FromStr;

use finstat_data::resolve_data_path;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Only supported config schema.
pub const SCHEMA_VERSION: &str = "1";

/// Pipeline configuration, read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Config schema version, must be `"1"`
    pub schema_version: String,
    /// Instrument identifier
    pub symbol: String,
    /// Saved provider envelope; defaults to the data-root layout
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// Run the statistical analyzer after the indicators
    #[serde(default = "default_true")]
    pub run_analysis: bool,
    /// Include the per-bar indicator table in the result
    #[serde(default = "default_true")]
    pub include_table: bool,
    /// Logging settings for the CLI
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl PipelineConfig {
    /// Minimal config for `symbol` with every default applied.
    #[must_use]
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            symbol: symbol.into(),
            data_file: None,
            run_analysis: true,
            include_table: true,
            logging: LoggingConfig::default(),
        }
    }

    /// Parses config JSON.
    ///
    /// # Errors
    /// [`PipelineError::ConfigParse`] when the JSON does not match the schema.
    pub fn from_json(config_json: &str) -> Result<Self, PipelineError> {
        serde_json::from_str(config_json).map_err(|e| PipelineError::ConfigParse(e.to_string()))
    }

    /// Path of the saved envelope to load.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| resolve_data_path(&self.symbol))
    }

    /// Checks the config and normalises the symbol (trimmed, upper case).
    ///
    /// # Errors
    /// [`PipelineError::ConfigValidation`] for an unknown schema version, an
    /// empty symbol or an unknown logging level.
    pub fn validated(mut self) -> Result<Self, PipelineError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(PipelineError::ConfigValidation(format!(
                "unsupported schema_version {:?}, expected {SCHEMA_VERSION:?}",
                self.schema_version
            )));
        }

        self.symbol = self.symbol.trim().to_uppercase();
        if self.symbol.is_empty() {
            return Err(PipelineError::ConfigValidation("symbol is empty".to_string()));
        }

        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(PipelineError::ConfigValidation(format!(
                "logging.level {:?} is not a level",
                self.logging.level
            )));
        }

        Ok(self)
    }
}
