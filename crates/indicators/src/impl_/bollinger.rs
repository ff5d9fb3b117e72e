//! Bollinger Bands indicator

use crate::rolling::{defined, rolling_mean, rolling_std};
use crate::traits::{IntoMultiVecs, MultiOutputIndicator, closes};
use finstat_types::{Bar, Value};

/// Bollinger Bands result: the three bands plus the deviation they were built from.
#[derive(Debug, Clone)]
pub struct BollingerResult {
    /// Upper band = SMA + std_factor * std
    pub upper: Vec<Value>,
    /// Middle band = SMA
    pub middle: Vec<Value>,
    /// Lower band = SMA - std_factor * std
    pub lower: Vec<Value>,
    /// Rolling sample standard deviation
    pub std: Vec<Value>,
}

impl IntoMultiVecs for BollingerResult {
    fn into_vecs(self) -> Vec<Vec<Value>> {
        vec![self.upper, self.middle, self.lower, self.std]
    }
}

/// Bollinger Bands
///
/// - Upper Band = SMA + (std_factor * StdDev)
/// - Middle Band = SMA
/// - Lower Band = SMA - (std_factor * StdDev)
///
/// StdDev is the sample standard deviation (N-1) over the same window.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    /// Period for the SMA and standard deviation
    pub period: usize,
    /// Multiplier for standard deviation (typically 2.0)
    pub std_factor: f64,
}

impl BollingerBands {
    /// Creates new Bollinger Bands with the given parameters.
    #[must_use]
    pub fn new(period: usize, std_factor: f64) -> Self {
        Self { period, std_factor }
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Output = BollingerResult;

    fn compute_all(&self, bars: &[Bar]) -> Self::Output {
        let closes = defined(&closes(bars));
        let middle = rolling_mean(&closes, self.period);
        let std = rolling_std(&closes, self.period);

        let (upper, lower) = middle
            .iter()
            .zip(&std)
            .map(|(&m, &s)| (m + s * self.std_factor, m - s * self.std_factor))
            .unzip();

        BollingerResult {
            upper,
            middle,
            lower,
            std,
        }
    }

    fn name(&self) -> &str {
        "BOLLINGER"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }

    fn output_names(&self) -> &'static [&'static str] {
        &["upper", "middle", "lower", "std"]
    }
}
