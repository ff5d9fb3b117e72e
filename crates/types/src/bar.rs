//! Daily OHLCV bar.

use chrono::NaiveDate;

/// One trading day of open/high/low/close/volume.
///
/// `date` is the ordering key of a [`crate::Series`]; prices must be
/// positive and volume non-negative once the bar sits inside a series.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bar {
    /// Trading day (exchange calendar date, no time component)
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Traded volume
    pub volume: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Price fields paired with their names, in OHLC order.
    #[must_use]
    pub fn prices(&self) -> [(&'static str, f64); 4] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_serde_roundtrip() {
        let bar = Bar::new(
            NaiveDate::from_ymd_opt(2023, 8, 4).unwrap(),
            128.5,
            130.1,
            127.9,
            129.7,
            24_118_300.0,
        );

        let json = serde_json::to_string(&bar).unwrap();
        assert!(json.contains("\"date\":\"2023-08-04\""));

        let deserialized: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, deserialized);
    }

    #[test]
    fn test_bar_prices_order() {
        let bar = Bar::new(NaiveDate::from_ymd_opt(2023, 1, 3).unwrap(), 1.0, 2.0, 0.5, 1.5, 10.0);
        let names: Vec<&str> = bar.prices().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["open", "high", "low", "close"]);
    }
}
