//! Classical multiplicative seasonal decomposition.

use finstat_types::Value;

use crate::error::{AnalysisError, require_len};
use crate::report::Decomposition;

const PROCEDURE: &str = "seasonal_decompose";

/// Approximate number of trading days per year.
pub const TRADING_YEAR: usize = 252;

/// Splits `x` into `trend * seasonal * resid`.
///
/// - trend: centred moving average over one period (for an even period the two
///   end points get half weight), undefined within `period / 2` of either end;
/// - seasonal: mean of `x / trend` per phase `i % period`, rescaled to mean 1;
/// - resid: `x / seasonal / trend`.
///
/// # Errors
/// - [`AnalysisError::InvalidParams`] for a period below 2.
/// - [`AnalysisError::InsufficientData`] for fewer than two full periods.
/// - [`AnalysisError::NonPositiveValue`] when any value is `<= 0`.
pub fn seasonal_decompose(x: &[f64], period: usize) -> Result<Decomposition, AnalysisError> {
    if period < 2 {
        return Err(AnalysisError::invalid_params(format!(
            "{PROCEDURE}: period must be at least 2, got {period}"
        )));
    }
    require_len(PROCEDURE, x, 2 * period)?;
    if x.iter().any(|v| *v <= 0.0) {
        return Err(AnalysisError::NonPositiveValue {
            procedure: PROCEDURE,
        });
    }

    let trend = centred_moving_average(x, period);

    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, (obs, t)) in x.iter().zip(&trend).enumerate() {
        if let Some(t) = t.get() {
            sums[i % period] += obs / t;
            counts[i % period] += 1;
        }
    }
    let mut indices: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| s / c as f64)
        .collect();
    let scale = indices.iter().sum::<f64>() / period as f64;
    indices.iter_mut().for_each(|s| *s /= scale);

    let seasonal: Vec<Value> = (0..x.len())
        .map(|i| Value::new(indices[i % period]))
        .collect();
    let resid = x
        .iter()
        .zip(seasonal.iter().zip(&trend))
        .map(|(&obs, (&s, &t))| Value::new(obs) / s / t)
        .collect();

    tracing::debug!(
        "seasonal_decompose: n={} period={period} defined trend={}",
        x.len(),
        trend.iter().filter(|v| v.is_defined()).count()
    );
    Ok(Decomposition {
        period,
        trend,
        seasonal,
        resid,
    })
}

/// Two-sided moving average whose window spans exactly one period.
fn centred_moving_average(x: &[f64], period: usize) -> Vec<Value> {
    let weights: Vec<f64> = if period % 2 == 0 {
        let mut w = vec![1.0; period + 1];
        w[0] = 0.5;
        w[period] = 0.5;
        w.iter().map(|v| v / period as f64).collect()
    } else {
        vec![1.0 / period as f64; period]
    };
    let half = weights.len() / 2;

    let mut trend = vec![Value::Undefined; x.len()];
    if x.len() < weights.len() {
        return trend;
    }
    for (i, window) in x.windows(weights.len()).enumerate() {
        let sum: f64 = window.iter().zip(&weights).map(|(v, w)| v * w).sum();
        trend[i + half] = Value::new(sum);
    }
    trend
}
