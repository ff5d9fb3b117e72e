//! Rolling sample standard deviation of close prices

use crate::rolling::{defined, rolling_std};
use crate::traits::{Indicator, closes};
use finstat_types::{Bar, Value};

/// Rolling standard deviation with divisor N-1.
#[derive(Debug, Clone)]
pub struct RollingStd {
    /// Window length
    pub period: usize,
}

impl RollingStd {
    /// Creates a rolling standard deviation over `period` closes.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for RollingStd {
    fn compute(&self, bars: &[Bar]) -> Vec<Value> {
        rolling_std(&defined(&closes(bars)), self.period)
    }

    fn name(&self) -> &str {
        "STD"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}
