//! Pipeline error types.

use finstat_analysis::{AnalysisError, ProcedureFailure};
use finstat_data::DataError;
use finstat_indicators::IndicatorError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// JSON config parse error
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Config validation error
    #[error("config validation error: {0}")]
    ConfigValidation(String),

    /// Result serialization error
    #[error("result serialization error: {0}")]
    ResultSerialize(String),

    /// Envelope loading or decoding error
    #[error("data error: {0}")]
    Data(#[from] DataError),

    /// Indicator computation error
    #[error("indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    /// Statistical analysis error
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Runtime error
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl PipelineError {
    /// Returns true if this is a config parse/validation error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PipelineError::ConfigParse(_) | PipelineError::ConfigValidation(_)
        )
    }

    /// Returns the error category for the output contract.
    /// Categories: `config`, `market_data`, `indicator`, `analysis`, `runtime`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            PipelineError::ConfigParse(_) | PipelineError::ConfigValidation(_) => "config",
            PipelineError::Data(_) => "market_data",
            PipelineError::Indicator(_) => "indicator",
            PipelineError::Analysis(_) => "analysis",
            PipelineError::ResultSerialize(_) | PipelineError::Runtime(_) => "runtime",
        }
    }

    /// Structured details for the error result, where the variant carries any.
    fn details(&self) -> serde_json::Value {
        match self {
            PipelineError::Analysis(AnalysisError::MissingColumn(column)) => {
                json!({ "column": column })
            }
            PipelineError::Analysis(err) => {
                serde_json::to_value(ProcedureFailure::from(err)).unwrap_or_else(|_| json!({}))
            }
            _ => json!({}),
        }
    }
}

/// Error result information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    /// Error category
    pub category: String,
    /// Error message
    pub message: String,
    /// Additional error details
    #[serde(default)]
    pub details: serde_json::Value,
}

impl From<PipelineError> for ErrorResult {
    fn from(err: PipelineError) -> Self {
        Self {
            category: err.error_category().to_string(),
            details: err.details(),
            message: err.to_string(),
        }
    }
}
