//! Data-layer error types.

use finstat_types::SeriesError;
use thiserror::Error;

/// Errors that can occur while decoding or loading provider data.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required file was not found on disk.
    #[error("File not found: {0} ({1})")]
    FileNotFound(String, String),

    /// The payload is not valid JSON or has an unexpected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The provider answered with an error message instead of data.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider answered with a throttling notice instead of data.
    #[error("Provider throttled the request: {0}")]
    Throttled(String),

    /// A required envelope field is missing.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A date key could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A numeric field could not be parsed.
    #[error("Invalid number for {field} on {date}: {value:?}")]
    InvalidNumber {
        /// Date key of the offending record.
        date: String,
        /// Envelope field name.
        field: String,
        /// Raw value.
        value: String,
    },

    /// The decoded bars violate the series contract.
    #[error("Invalid series: {0}")]
    Series(#[from] SeriesError),
}

impl DataError {
    /// Returns true when the provider itself rejected the request.
    #[must_use]
    pub fn is_provider_rejection(&self) -> bool {
        matches!(self, DataError::Provider(_) | DataError::Throttled(_))
    }
}
