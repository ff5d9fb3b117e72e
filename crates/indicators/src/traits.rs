//! Indicator traits.

use finstat_types::{Bar, Value};

/// Trait for single-output indicators.
///
/// All indicators compute over the full bar series and return a `Vec<Value>`
/// of the same length. Value at index `i` only depends on bars `0..=i`.
pub trait Indicator: Send + Sync {
    /// Computes the indicator for all bars.
    ///
    /// Returns `Vec<Value>` with the same length as `bars`.
    /// Positions before the warmup period are [`Value::Undefined`].
    fn compute(&self, bars: &[Bar]) -> Vec<Value>;

    /// Name of the indicator (e.g., "SMA", "RSI").
    fn name(&self) -> &str;

    /// Minimum number of bars required for the first defined output.
    fn warmup_periods(&self) -> usize;
}

/// Trait for multi-output indicators like Bollinger Bands.
///
/// These indicators produce multiple series (e.g., upper, middle, lower bands)
/// that are computed together for efficiency.
pub trait MultiOutputIndicator: Send + Sync {
    /// Type of the output structure
    type Output: IntoMultiVecs;

    /// Computes all outputs at once.
    fn compute_all(&self, bars: &[Bar]) -> Self::Output;

    /// Name of the indicator.
    fn name(&self) -> &str;

    /// Minimum number of bars for the first defined output.
    fn warmup_periods(&self) -> usize;

    /// List of output names, in the order of [`IntoMultiVecs::into_vecs`].
    fn output_names(&self) -> &'static [&'static str];
}

/// Trait for converting multi-output results into a vector of vectors.
pub trait IntoMultiVecs {
    /// Converts the output structure into a vector of value vectors.
    fn into_vecs(self) -> Vec<Vec<Value>>;
}

/// Close prices of `bars`.
pub(crate) fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}
