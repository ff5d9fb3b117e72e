//! Indicator error types.

use finstat_types::SeriesError;
use thiserror::Error;

/// Errors that can occur during indicator computation.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// Input bars violate the series contract (empty, unsorted, bad prices)
    #[error("invalid input: {0}")]
    InvalidInput(#[from] SeriesError),
}
