//! One-sample Student t-test.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{AnalysisError, distribution_error, require_len};
use crate::report::{LocationTest, LocationVerdict};

const PROCEDURE: &str = "t_test";

/// Two-sided test of `mean(data) == population_mean`.
///
/// `t = (mean - population_mean) / (s / sqrt(n))` with `n - 1` degrees of freedom.
///
/// # Errors
/// - [`AnalysisError::InsufficientData`] for fewer than 2 observations.
/// - [`AnalysisError::ConstantSample`] when the sample deviation is zero.
pub fn one_sample_t_test(data: &[f64], population_mean: f64) -> Result<LocationTest, AnalysisError> {
    require_len(PROCEDURE, data, 2)?;

    let (lo, hi) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if hi - lo <= 0.0 {
        return Err(AnalysisError::ConstantSample {
            procedure: PROCEDURE,
        });
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let var = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let statistic = (mean - population_mean) / (var / n).sqrt();
    let dist = StudentsT::new(0.0, 1.0, n - 1.0).map_err(distribution_error)?;
    let p_value = (2.0 * dist.sf(statistic.abs())).min(1.0);

    tracing::debug!("t_test: n={n} t={statistic:.6} p={p_value:.6}");
    Ok(LocationTest {
        statistic,
        p_value,
        population_mean,
        verdict: LocationVerdict::from_p_value(p_value),
    })
}
