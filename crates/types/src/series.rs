//! Validated, date-ordered bar series.

use chrono::NaiveDate;

use crate::bar::Bar;
use crate::error::SeriesError;

/// Ordered sequence of bars, strictly increasing by date.
///
/// Construction validates the whole input, so every `Series` in the system
/// is non-empty, chronological, has positive finite prices and finite
/// non-negative volume. Missing trading days are simply absent.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Validates `bars` and wraps them.
    ///
    /// # Errors
    /// Any [`SeriesError`] reported by [`validate_bars`].
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        validate_bars(&bars)?;
        Ok(Self { bars })
    }

    /// Returns the bars.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false for a constructed series; kept for slice-like APIs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close prices in series order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes in series order.
    #[must_use]
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Dates in series order.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// First and last date covered by the series.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.bars.first()?.date, self.bars.last()?.date))
    }

    /// Consumes the series and returns the bars.
    #[must_use]
    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }
}

impl TryFrom<Vec<Bar>> for Series {
    type Error = SeriesError;

    fn try_from(bars: Vec<Bar>) -> Result<Self, Self::Error> {
        Series::new(bars)
    }
}

impl From<Series> for Vec<Bar> {
    fn from(series: Series) -> Self {
        series.bars
    }
}

/// Validates a sequence of bars against the series contract.
///
/// # Errors
/// - [`SeriesError::Empty`] when `bars` is empty.
/// - [`SeriesError::NonFiniteValue`] for NaN/Inf in any field.
/// - [`SeriesError::NonPositivePrice`] for open/high/low/close `<= 0`.
/// - [`SeriesError::NegativeVolume`] for volume `< 0`.
/// - [`SeriesError::NonChronological`] when a date does not follow its predecessor.
pub fn validate_bars(bars: &[Bar]) -> Result<(), SeriesError> {
    if bars.is_empty() {
        return Err(SeriesError::Empty);
    }

    for (index, bar) in bars.iter().enumerate() {
        for (field, value) in bar.prices() {
            if !value.is_finite() {
                return Err(SeriesError::NonFiniteValue { index, field });
            }
            if value <= 0.0 {
                return Err(SeriesError::NonPositivePrice {
                    index,
                    field,
                    value,
                });
            }
        }

        if !bar.volume.is_finite() {
            return Err(SeriesError::NonFiniteValue {
                index,
                field: "volume",
            });
        }
        if bar.volume < 0.0 {
            return Err(SeriesError::NegativeVolume {
                index,
                value: bar.volume,
            });
        }

        if index > 0 && bar.date <= bars[index - 1].date {
            return Err(SeriesError::NonChronological {
                index,
                previous: bars[index - 1].date,
                date: bar.date,
            });
        }
    }

    Ok(())
}
