use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or reading series data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeriesError {
    /// No bars were supplied
    #[error("empty series")]
    Empty,

    /// Dates are not strictly increasing
    #[error("non-chronological date at index {index}: {date} is not after {previous}")]
    NonChronological {
        /// Index of the offending bar.
        index: usize,
        /// Date of the preceding bar.
        previous: NaiveDate,
        /// Date of the offending bar.
        date: NaiveDate,
    },

    /// A price field is zero or negative
    #[error("non-positive {field} at index {index}: {value}")]
    NonPositivePrice {
        /// Index of the offending bar.
        index: usize,
        /// Name of the price field.
        field: &'static str,
        /// Observed value.
        value: f64,
    },

    /// A field is NaN or infinite
    #[error("non-finite {field} at index {index}")]
    NonFiniteValue {
        /// Index of the offending bar.
        index: usize,
        /// Name of the field.
        field: &'static str,
    },

    /// Volume below zero
    #[error("negative volume at index {index}: {value}")]
    NegativeVolume {
        /// Index of the offending bar.
        index: usize,
        /// Observed volume.
        value: f64,
    },

    /// A derived column is not aligned with the series
    #[error("column {column} has {actual} values, series has {expected}")]
    LengthMismatch {
        /// Column name.
        column: String,
        /// Series length.
        expected: usize,
        /// Column length.
        actual: usize,
    },

    /// A required column is absent
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// A caller asked for a number where the series holds no value
    #[error("undefined value in column {column} at index {index}")]
    UndefinedValue {
        /// Column name.
        column: String,
        /// Position in the series.
        index: usize,
    },
}

impl SeriesError {
    /// Returns true for errors caused by malformed input bars or columns.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SeriesError::Empty
                | SeriesError::NonChronological { .. }
                | SeriesError::NonPositivePrice { .. }
                | SeriesError::NonFiniteValue { .. }
                | SeriesError::NegativeVolume { .. }
                | SeriesError::LengthMismatch { .. }
        )
    }
}
