//! Simple and cumulative returns of close prices

use crate::traits::{Indicator, closes};
use finstat_types::{Bar, Value};

/// One-day simple return `close[i] / close[i-1] - 1`.
///
/// Undefined at the first bar.
#[derive(Debug, Clone, Default)]
pub struct DailyReturn;

impl Indicator for DailyReturn {
    fn compute(&self, bars: &[Bar]) -> Vec<Value> {
        let closes = closes(bars);
        std::iter::once(Value::Undefined)
            .chain(
                closes
                    .windows(2)
                    .map(|w| Value::new((w[1] - w[0]) / w[0])),
            )
            .take(closes.len())
            .collect()
    }

    fn name(&self) -> &str {
        "DAILY_RETURN"
    }

    fn warmup_periods(&self) -> usize {
        2
    }
}

/// Return relative to the first close, `close[i] / close[0] - 1`.
#[derive(Debug, Clone, Default)]
pub struct CumulativeReturn;

impl Indicator for CumulativeReturn {
    fn compute(&self, bars: &[Bar]) -> Vec<Value> {
        let Some(first) = bars.first().map(|b| b.close) else {
            return Vec::new();
        };
        bars.iter()
            .map(|b| Value::new(b.close / first - 1.0))
            .collect()
    }

    fn name(&self) -> &str {
        "CUMULATIVE_RETURN"
    }

    fn warmup_periods(&self) -> usize {
        1
    }
}
