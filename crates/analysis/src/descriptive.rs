//! Summary statistics.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, require_len};

const PROCEDURE: &str = "describe";

/// Count, moments and quartiles of a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (N-1)
    pub std: f64,
    /// Smallest observation
    pub min: f64,
    /// First quartile
    #[serde(rename = "25%")]
    pub q25: f64,
    /// Median
    #[serde(rename = "50%")]
    pub median: f64,
    /// Third quartile
    #[serde(rename = "75%")]
    pub q75: f64,
    /// Largest observation
    pub max: f64,
}

/// Summarises `data`.
///
/// # Errors
/// [`AnalysisError::InsufficientData`] for fewer than 2 observations.
pub fn describe(data: &[f64]) -> Result<DescriptiveStats, AnalysisError> {
    require_len(PROCEDURE, data, 2)?;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let ss: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();

    Ok(DescriptiveStats {
        count: data.len(),
        mean,
        std: (ss / (n - 1.0)).sqrt(),
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear-interpolated quantile of sorted data at position `q * (n - 1)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
