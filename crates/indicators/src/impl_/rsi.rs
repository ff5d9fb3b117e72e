//! Relative Strength Index (RSI) indicator

use crate::rolling::rolling_mean;
use crate::traits::{Indicator, closes};
use finstat_types::{Bar, Value};

/// Relative Strength Index with simple rolling averages of gains and losses.
///
/// `delta[0]` is undefined, so the first RSI is at index `period`.
/// Flat windows (no gains and no losses) are undefined rather than 50 or NaN.
#[derive(Debug, Clone)]
pub struct RSI {
    /// Averaging window
    pub period: usize,
}

impl RSI {
    /// Creates an RSI with the given averaging window.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// RSI from average gain and loss.
///
/// - both zero: undefined
/// - no losses: 100
/// - no gains: 0
#[must_use]
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Value {
    match (avg_gain == 0.0, avg_loss == 0.0) {
        (true, true) => Value::Undefined,
        (_, true) => Value::Defined(100.0),
        (true, false) => Value::Defined(0.0),
        (false, false) => Value::new(100.0 - 100.0 / (1.0 + avg_gain / avg_loss)),
    }
}

impl Indicator for RSI {
    fn compute(&self, bars: &[Bar]) -> Vec<Value> {
        let closes = closes(bars);
        let deltas: Vec<Value> = std::iter::once(Value::Undefined)
            .chain(closes.windows(2).map(|w| Value::new(w[1] - w[0])))
            .take(closes.len())
            .collect();

        let gains: Vec<Value> = deltas.iter().map(|d| d.map(|x| x.max(0.0))).collect();
        let losses: Vec<Value> = deltas.iter().map(|d| d.map(|x| (-x).max(0.0))).collect();

        rolling_mean(&gains, self.period)
            .into_iter()
            .zip(rolling_mean(&losses, self.period))
            .map(|(gain, loss)| match (gain, loss) {
                (Value::Defined(g), Value::Defined(l)) => rsi_from_averages(g, l),
                _ => Value::Undefined,
            })
            .collect()
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn warmup_periods(&self) -> usize {
        self.period + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_bars::from_closes;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_value_at_period() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + f64::from(i % 3)).collect();
        let result = RSI::new(14).compute(&from_closes(&closes));

        assert!(result[..14].iter().all(|v| v.is_undefined()));
        assert!(result[14].is_defined());
    }

    #[test]
    fn test_rsi_mixed_window() {
        // deltas +2, -1: avg gain 1, avg loss 0.5, RS 2
        let result = RSI::new(2).compute(&from_closes(&[10.0, 12.0, 11.0]));
        assert_relative_eq!(result[2].to_f64(), 100.0 - 100.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_monotone_windows_hit_the_bounds() {
        let up = RSI::new(3).compute(&from_closes(&[1.0, 2.0, 3.0, 4.0]));
        assert_eq!(up[3], Value::Defined(100.0));

        let down = RSI::new(3).compute(&from_closes(&[4.0, 3.0, 2.0, 1.0]));
        assert_eq!(down[3], Value::Defined(0.0));
    }

    #[test]
    fn test_flat_window_is_undefined() {
        let result = RSI::new(14).compute(&from_closes(&[50.0; 30]));
        assert!(result.iter().all(|v| v.is_undefined()));
    }

    #[test]
    fn test_rsi_from_averages_rules() {
        assert_eq!(rsi_from_averages(0.0, 0.0), Value::Undefined);
        assert_eq!(rsi_from_averages(1.0, 0.0), Value::Defined(100.0));
        assert_eq!(rsi_from_averages(0.0, 1.0), Value::Defined(0.0));
        assert_relative_eq!(rsi_from_averages(1.0, 1.0).to_f64(), 50.0);
    }
}
