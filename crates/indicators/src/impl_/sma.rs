//! Simple Moving Average (SMA) indicator

use crate::rolling::{defined, rolling_mean};
use crate::traits::{Indicator, closes};
use finstat_types::{Bar, Value};

/// Simple Moving Average
///
/// Arithmetic mean of the last N close prices.
#[derive(Debug, Clone)]
pub struct SMA {
    /// Number of periods for the moving average
    pub period: usize,
}

impl SMA {
    /// Creates a new SMA indicator with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for SMA {
    fn compute(&self, bars: &[Bar]) -> Vec<Value> {
        rolling_mean(&defined(&closes(bars)), self.period)
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_bars::from_closes;

    #[test]
    fn test_sma_basic() {
        let bars = from_closes(&[10.0, 11.0, 12.0, 10.0, 11.0]);
        let result = SMA::new(5).compute(&bars);

        assert!(result[..4].iter().all(|v| v.is_undefined()));
        assert!((result[4].to_f64() - 10.8).abs() < 1e-10);
    }

    #[test]
    fn test_sma_constant_input() {
        let bars = from_closes(&[5.0; 10]);
        let result = SMA::new(3).compute(&bars);

        for value in result.iter().skip(2) {
            assert_eq!(*value, Value::Defined(5.0));
        }
    }

    #[test]
    fn test_sma_insufficient_data() {
        let bars = from_closes(&[1.0, 2.0]);
        let result = SMA::new(5).compute(&bars);
        assert!(result.iter().all(|v| v.is_undefined()));
    }

    #[test]
    fn test_sma_period_one_matches_close() {
        let bars = from_closes(&[1.5, 2.5, 3.0]);
        let result = SMA::new(1).compute(&bars);

        for (bar, value) in bars.iter().zip(result.iter()) {
            assert_eq!(value.get(), Some(bar.close));
        }
    }
}
