//! Decoding of the provider's `TIME_SERIES_DAILY` envelope.
//!
//! Expected shape:
//!
//! ```text
//! {
//!   "Meta Data": { ... },
//!   "Time Series (Daily)": {
//!     "2023-08-04": {"1. open": "128.5", "2. high": "130.1", "3. low": "127.9",
//!                    "4. close": "129.7", "5. volume": "24118300"},
//!     ...
//!   }
//! }
//! ```
//!
//! Records arrive newest first; the decoded series is sorted ascending.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use finstat_types::{Bar, Series};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::DataError;

/// Key holding the daily records.
pub const TIME_SERIES_KEY: &str = "Time Series (Daily)";
/// Key the provider uses for hard errors (bad symbol, bad key).
const ERROR_KEY: &str = "Error Message";
/// Keys the provider uses for throttling notices.
const THROTTLE_KEYS: [&str; 2] = ["Note", "Information"];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct DailyRecord {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

/// Decodes a daily envelope from JSON text.
///
/// # Errors
/// - [`DataError::Parse`] for invalid JSON.
/// - Any error from [`decode_daily_value`].
pub fn decode_daily_envelope(payload: &str) -> Result<Series, DataError> {
    let value: JsonValue =
        serde_json::from_str(payload).map_err(|e| DataError::Parse(e.to_string()))?;
    decode_daily_value(&value)
}

/// Decodes an already parsed daily envelope.
///
/// # Errors
/// - [`DataError::Provider`] / [`DataError::Throttled`] for provider notices.
/// - [`DataError::MissingField`] when the time-series object is absent.
/// - [`DataError::Parse`] when a record does not have the expected fields.
/// - [`DataError::InvalidDate`] / [`DataError::InvalidNumber`] for unparseable entries.
/// - [`DataError::Series`] when the bars violate the series contract.
pub fn decode_daily_value(value: &JsonValue) -> Result<Series, DataError> {
    reject_provider_notice(value)?;

    let records = value
        .get(TIME_SERIES_KEY)
        .ok_or_else(|| DataError::MissingField(TIME_SERIES_KEY.to_string()))?;

    let records: BTreeMap<String, DailyRecord> = serde_json::from_value(records.clone())
        .map_err(|e| DataError::Parse(format!("{TIME_SERIES_KEY}: {e}")))?;

    let mut bars = records
        .iter()
        .map(|(date, record)| decode_record(date, record))
        .collect::<Result<Vec<_>, _>>()?;
    bars.sort_by_key(|bar| bar.date);

    let series = Series::new(bars)?;
    if let Some((first, last)) = series.date_range() {
        tracing::debug!("decoded {} daily bars from {first} to {last}", series.len());
    }
    Ok(series)
}

fn reject_provider_notice(value: &JsonValue) -> Result<(), DataError> {
    if let Some(message) = value.get(ERROR_KEY) {
        tracing::warn!("provider rejected request: {message}");
        return Err(DataError::Provider(notice_text(message)));
    }

    for key in THROTTLE_KEYS {
        // A notice next to real data is informational only.
        if value.get(TIME_SERIES_KEY).is_none()
            && let Some(message) = value.get(key)
        {
            tracing::warn!("provider throttled request: {message}");
            return Err(DataError::Throttled(notice_text(message)));
        }
    }

    Ok(())
}

fn notice_text(message: &JsonValue) -> String {
    message
        .as_str()
        .map_or_else(|| message.to_string(), str::to_string)
}

fn decode_record(date: &str, record: &DailyRecord) -> Result<Bar, DataError> {
    let parsed_date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|e| DataError::InvalidDate(format!("{date}: {e}")))?;

    let field = |name: &str, raw: &str| -> Result<f64, DataError> {
        raw.trim()
            .parse::<f64>()
            .map_err(|_| DataError::InvalidNumber {
                date: date.to_string(),
                field: name.to_string(),
                value: raw.to_string(),
            })
    };

    Ok(Bar {
        date: parsed_date,
        open: field("open", &record.open)?,
        high: field("high", &record.high)?,
        low: field("low", &record.low)?,
        close: field("close", &record.close)?,
        volume: field("volume", &record.volume)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use finstat_types::SeriesError;

    fn envelope(records: &str) -> String {
        format!(
            r#"{{
                "Meta Data": {{"2. Symbol": "GOOGL"}},
                "Time Series (Daily)": {{{records}}}
            }}"#
        )
    }

    const RECORD_AUG_04: &str = r#""2023-08-04": {"1. open": "128.50", "2. high": "130.10", "3. low": "127.90", "4. close": "129.70", "5. volume": "24118300"}"#;
    const RECORD_AUG_03: &str = r#""2023-08-03": {"1. open": "127.00", "2. high": "129.00", "3. low": "126.50", "4. close": "128.45", "5. volume": "18253700"}"#;

    #[test]
    fn test_decode_sorts_ascending() {
        let payload = envelope(&format!("{RECORD_AUG_04}, {RECORD_AUG_03}"));
        let series = decode_daily_envelope(&payload).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(
            series.bars()[0].date,
            NaiveDate::from_ymd_opt(2023, 8, 3).unwrap()
        );
        assert!((series.bars()[1].close - 129.70).abs() < 1e-12);
        assert!((series.bars()[1].volume - 24_118_300.0).abs() < 1e-6);
    }

    #[test]
    fn test_provider_error_is_rejected() {
        let payload = r#"{"Error Message": "Invalid API call."}"#;
        let err = decode_daily_envelope(payload).unwrap_err();
        assert!(matches!(err, DataError::Provider(ref msg) if msg == "Invalid API call."));
        assert!(err.is_provider_rejection());
    }

    #[test]
    fn test_throttle_notice_is_rejected() {
        let payload = r#"{"Note": "Thank you for using our API. Call frequency exceeded."}"#;
        let err = decode_daily_envelope(payload).unwrap_err();
        assert!(matches!(err, DataError::Throttled(_)));
    }

    #[test]
    fn test_missing_time_series() {
        let payload = r#"{"Meta Data": {}}"#;
        assert!(matches!(
            decode_daily_envelope(payload).unwrap_err(),
            DataError::MissingField(_)
        ));
    }

    #[test]
    fn test_invalid_number_and_date() {
        let bad_number = envelope(
            r#""2023-08-04": {"1. open": "n/a", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1"}"#,
        );
        assert!(matches!(
            decode_daily_envelope(&bad_number).unwrap_err(),
            DataError::InvalidNumber { ref field, .. } if field == "open"
        ));

        let bad_date = envelope(
            r#""04/08/2023": {"1. open": "1", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1"}"#,
        );
        assert!(matches!(
            decode_daily_envelope(&bad_date).unwrap_err(),
            DataError::InvalidDate(_)
        ));
    }

    #[test]
    fn test_empty_time_series_is_invalid_series() {
        let payload = envelope("");
        assert!(matches!(
            decode_daily_envelope(&payload).unwrap_err(),
            DataError::Series(SeriesError::Empty)
        ));
    }

    #[test]
    fn test_non_positive_price_is_invalid_series() {
        let payload = envelope(
            r#""2023-08-04": {"1. open": "0", "2. high": "1", "3. low": "1", "4. close": "1", "5. volume": "1"}"#,
        );
        assert!(matches!(
            decode_daily_envelope(&payload).unwrap_err(),
            DataError::Series(SeriesError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            decode_daily_envelope("{not json").unwrap_err(),
            DataError::Parse(_)
        ));
    }
}
