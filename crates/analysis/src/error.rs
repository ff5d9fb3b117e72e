//! Analysis error types.

use finstat_types::SeriesError;
use thiserror::Error;

/// Errors raised by the statistical procedures.
///
/// Every procedure checks its own preconditions up front, so a failure names
/// the procedure and the exact reason rather than surfacing as a NaN later.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A required column is absent from the augmented series
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Fewer observations than the procedure needs
    #[error("{procedure}: need at least {required} observations, have {available}")]
    InsufficientData {
        /// Procedure that rejected the input
        procedure: &'static str,
        /// Minimum number of observations
        required: usize,
        /// Observations actually available
        available: usize,
    },

    /// Input has zero variance or zero range
    #[error("{procedure}: input is constant")]
    ConstantSample {
        /// Procedure that rejected the input
        procedure: &'static str,
    },

    /// Multiplicative model applied to zero or negative values
    #[error("{procedure}: values must be strictly positive")]
    NonPositiveValue {
        /// Procedure that rejected the input
        procedure: &'static str,
    },

    /// Regression design matrix is not invertible
    #[error("{procedure}: singular regression matrix")]
    Singular {
        /// Procedure that rejected the input
        procedure: &'static str,
    },

    /// Invalid parameters for the procedure
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Distribution could not be constructed
    #[error("distribution error: {0}")]
    Distribution(String),

    /// Any other series access failure
    #[error("series error: {0}")]
    Series(SeriesError),
}

impl AnalysisError {
    /// Creates an `InsufficientData` error.
    #[must_use]
    pub fn insufficient(procedure: &'static str, required: usize, available: usize) -> Self {
        AnalysisError::InsufficientData {
            procedure,
            required,
            available,
        }
    }

    /// Creates an `InvalidParams` error with a message.
    #[must_use]
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        AnalysisError::InvalidParams(msg.into())
    }

    /// Returns true if the input was too short for the procedure.
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, AnalysisError::InsufficientData { .. })
    }

    /// Short snake_case name of the failure kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::MissingColumn(_) => "missing_column",
            AnalysisError::InsufficientData { .. } => "insufficient_data",
            AnalysisError::ConstantSample { .. } => "constant_sample",
            AnalysisError::NonPositiveValue { .. } => "non_positive_value",
            AnalysisError::Singular { .. } => "singular",
            AnalysisError::InvalidParams(_) => "invalid_params",
            AnalysisError::Distribution(_) => "distribution",
            AnalysisError::Series(_) => "series",
        }
    }

    /// Procedure that raised the error, when the variant records one.
    #[must_use]
    pub fn procedure(&self) -> Option<&'static str> {
        match self {
            AnalysisError::InsufficientData { procedure, .. }
            | AnalysisError::ConstantSample { procedure }
            | AnalysisError::NonPositiveValue { procedure }
            | AnalysisError::Singular { procedure } => Some(procedure),
            _ => None,
        }
    }
}

impl From<SeriesError> for AnalysisError {
    fn from(err: SeriesError) -> Self {
        match err {
            SeriesError::MissingColumn(name) => AnalysisError::MissingColumn(name),
            other => AnalysisError::Series(other),
        }
    }
}

/// Maps a distribution constructor failure.
pub(crate) fn distribution_error(err: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::Distribution(err.to_string())
}

/// Rejects `data` shorter than `required`.
pub(crate) fn require_len(
    procedure: &'static str,
    data: &[f64],
    required: usize,
) -> Result<(), AnalysisError> {
    if data.len() < required {
        return Err(AnalysisError::insufficient(procedure, required, data.len()));
    }
    Ok(())
}
