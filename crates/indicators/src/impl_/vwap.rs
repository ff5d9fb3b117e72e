//! Cumulative Volume-Weighted Average Price

use crate::traits::Indicator;
use finstat_types::{Bar, Value};

/// VWAP anchored at the first bar: `cumsum(close * volume) / cumsum(volume)`.
///
/// Undefined while the cumulative volume is zero.
#[derive(Debug, Clone, Default)]
pub struct VWAP;

impl Indicator for VWAP {
    fn compute(&self, bars: &[Bar]) -> Vec<Value> {
        bars.iter()
            .scan((0.0_f64, 0.0_f64), |(pv, vol), bar| {
                *pv += bar.close * bar.volume;
                *vol += bar.volume;
                Some(Value::new(*pv / *vol))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "VWAP"
    }

    fn warmup_periods(&self) -> usize {
        1
    }
}
