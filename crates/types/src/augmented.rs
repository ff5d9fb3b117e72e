//! Series plus aligned indicator columns.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::columns::CLOSE;
use crate::error::SeriesError;
use crate::series::Series;
use crate::value::Value;

/// Input series plus named columns aligned to it, one value per bar.
///
/// Columns are kept in a `BTreeMap` so iteration and serialized output have
/// a deterministic (sorted) order. Instances are built by value: adding a
/// column consumes the old instance and returns a new one, nothing is
/// mutated behind a shared reference.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AugmentedSeries {
    series: Series,
    columns: BTreeMap<String, Vec<Value>>,
}

impl AugmentedSeries {
    /// Creates an augmented series without indicator columns.
    #[must_use]
    pub fn new(series: Series) -> Self {
        Self {
            series,
            columns: BTreeMap::new(),
        }
    }

    /// Returns a new instance with `values` stored under `name`.
    ///
    /// # Errors
    /// [`SeriesError::LengthMismatch`] when `values` is not aligned with the series.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> Result<Self, SeriesError> {
        let name = name.into();
        if values.len() != self.series.len() {
            return Err(SeriesError::LengthMismatch {
                column: name,
                expected: self.series.len(),
                actual: values.len(),
            });
        }
        self.columns.insert(name, values);
        Ok(self)
    }

    /// Underlying bar series.
    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Always false for a constructed series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Close prices.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.series.closes()
    }

    /// Returns a column by name, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Returns a column by name.
    ///
    /// # Errors
    /// [`SeriesError::MissingColumn`] when the column was never added.
    pub fn require(&self, name: &str) -> Result<&[Value], SeriesError> {
        self.column(name)
            .ok_or_else(|| SeriesError::MissingColumn(name.to_string()))
    }

    /// Returns true when `name` is a stored column or the close price.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        name == CLOSE || self.columns.contains_key(name)
    }

    /// Names of the stored indicator columns, sorted.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Reads one cell as a number.
    ///
    /// # Errors
    /// - [`SeriesError::MissingColumn`] for an unknown column.
    /// - [`SeriesError::UndefinedValue`] when the cell is undefined or `index` is out of range.
    pub fn value_at(&self, name: &str, index: usize) -> Result<f64, SeriesError> {
        if name == CLOSE {
            return self
                .series
                .bars()
                .get(index)
                .map(|b| b.close)
                .ok_or_else(|| undefined(name, index));
        }

        self.require(name)?
            .get(index)
            .and_then(|v| v.get())
            .ok_or_else(|| undefined(name, index))
    }

    /// Flattens the series into one row per bar for tabular output.
    #[must_use]
    pub fn to_rows(&self) -> Vec<TableRow> {
        self.series
            .bars()
            .iter()
            .enumerate()
            .map(|(idx, bar)| TableRow {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
                volume: bar.volume,
                indicators: self
                    .columns
                    .iter()
                    .map(|(name, values)| (name.clone(), values[idx]))
                    .collect(),
            })
            .collect()
    }
}

fn undefined(name: &str, index: usize) -> SeriesError {
    SeriesError::UndefinedValue {
        column: name.to_string(),
        index,
    }
}

/// One output row keyed by date; undefined cells serialize as `null`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableRow {
    /// Trading day
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: f64,
    /// Indicator cells by column name
    #[serde(flatten)]
    pub indicators: BTreeMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bar::Bar;
    use crate::columns::{DAILY_RETURN, RSI};

    fn series(closes: &[f64]) -> Series {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let date = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
                    + chrono::Days::new(i as u64);
                Bar::new(date, c, c, c, c, 100.0)
            })
            .collect();
        Series::new(bars).unwrap()
    }

    #[test]
    fn test_with_column_checks_alignment() {
        let aug = AugmentedSeries::new(series(&[1.0, 2.0, 3.0]));
        let err = aug
            .with_column(RSI, vec![Value::Undefined; 2])
            .unwrap_err();
        assert!(matches!(
            err,
            SeriesError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_require_and_value_at() {
        let aug = AugmentedSeries::new(series(&[1.0, 2.0]))
            .with_column(DAILY_RETURN, vec![Value::Undefined, Value::Defined(1.0)])
            .unwrap();

        assert_eq!(aug.value_at(DAILY_RETURN, 1).unwrap(), 1.0);
        assert_eq!(aug.value_at(CLOSE, 0).unwrap(), 1.0);
        assert!(aug.has_column(CLOSE));
        assert!(matches!(
            aug.value_at(DAILY_RETURN, 0).unwrap_err(),
            SeriesError::UndefinedValue { index: 0, .. }
        ));
        assert!(matches!(
            aug.require(RSI).unwrap_err(),
            SeriesError::MissingColumn(_)
        ));
    }

    #[test]
    fn test_rows_serialize_flat_with_nulls() {
        let aug = AugmentedSeries::new(series(&[10.0, 11.0]))
            .with_column(DAILY_RETURN, vec![Value::Undefined, Value::Defined(0.1)])
            .unwrap();

        let rows = aug.to_rows();
        assert_eq!(rows.len(), 2);

        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["date"], "2023-01-02");
        assert!(json["Daily Return"].is_null());

        let json = serde_json::to_value(&rows[1]).unwrap();
        approx::assert_relative_eq!(json["Daily Return"].as_f64().unwrap(), 0.1);
    }
}
