//! MACD: difference of a fast and a slow EMA

use crate::impl_::ema::ema_values;
use crate::traits::{IntoMultiVecs, MultiOutputIndicator, closes};
use finstat_types::{Bar, Value};

/// Fast EMA, slow EMA and their difference.
#[derive(Debug, Clone)]
pub struct MacdResult {
    /// EMA with the fast span
    pub fast: Vec<Value>,
    /// EMA with the slow span
    pub slow: Vec<Value>,
    /// fast - slow
    pub macd: Vec<Value>,
}

impl IntoMultiVecs for MacdResult {
    fn into_vecs(self) -> Vec<Vec<Value>> {
        vec![self.fast, self.slow, self.macd]
    }
}

/// Moving Average Convergence Divergence line.
///
/// No signal line or histogram.
#[derive(Debug, Clone)]
pub struct MACD {
    /// Fast EMA span (typically 12)
    pub fast_span: usize,
    /// Slow EMA span (typically 26)
    pub slow_span: usize,
}

impl MACD {
    /// Creates a MACD with the given spans.
    #[must_use]
    pub fn new(fast_span: usize, slow_span: usize) -> Self {
        Self {
            fast_span,
            slow_span,
        }
    }
}

impl MultiOutputIndicator for MACD {
    type Output = MacdResult;

    fn compute_all(&self, bars: &[Bar]) -> Self::Output {
        let closes = closes(bars);
        let fast = ema_values(&closes, self.fast_span);
        let slow = ema_values(&closes, self.slow_span);
        let macd = fast.iter().zip(&slow).map(|(&f, &s)| f - s).collect();

        MacdResult { fast, slow, macd }
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn warmup_periods(&self) -> usize {
        1
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["fast", "slow", "macd"]
    }
}
