//! Exponential Moving Average (EMA) indicator

use crate::traits::{Indicator, closes};
use finstat_types::{Bar, Value};

/// Exponential Moving Average
///
/// Recursive form seeded with the first close:
/// `EMA[0] = close[0]`, `EMA[i] = alpha * close[i] + (1 - alpha) * EMA[i-1]`
/// with `alpha = 2 / (span + 1)`. Defined from the first bar onward.
#[derive(Debug, Clone)]
pub struct EMA {
    /// Span of the EMA
    pub span: usize,
}

impl EMA {
    /// Creates a new EMA indicator with the given span.
    #[must_use]
    pub fn new(span: usize) -> Self {
        Self { span }
    }

    /// Smoothing factor.
    fn alpha(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }
}

/// Runs the EMA recursion over raw values.
///
/// A span of zero has no valid smoothing factor and yields all undefined.
#[must_use]
pub fn ema_values(values: &[f64], span: usize) -> Vec<Value> {
    if span == 0 {
        return vec![Value::Undefined; values.len()];
    }
    let alpha = EMA::new(span).alpha();

    values
        .iter()
        .scan(None::<f64>, |prev, &x| {
            let next = prev.map_or(x, |p| alpha * x + (1.0 - alpha) * p);
            *prev = Some(next);
            Some(Value::new(next))
        })
        .collect()
}

impl Indicator for EMA {
    fn compute(&self, bars: &[Bar]) -> Vec<Value> {
        ema_values(&closes(bars), self.span)
    }

    fn name(&self) -> &str {
        "EMA"
    }

    fn warmup_periods(&self) -> usize {
        1
    }
}
