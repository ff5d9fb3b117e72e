//! Sample autocorrelation and partial autocorrelation.

use finstat_types::Value;

use crate::error::{AnalysisError, require_len};
use crate::report::Correlogram;

const PROCEDURE: &str = "correlogram";

/// Default number of lags.
pub const DEFAULT_MAX_LAG: usize = 40;

/// Autocorrelation for lags `0..=max_lag`.
///
/// Uses the biased autocovariance (divisor `n`), normalised by lag 0.
///
/// # Errors
/// - [`AnalysisError::InsufficientData`] when `max_lag >= n`.
/// - [`AnalysisError::ConstantSample`] for a series without variance.
pub fn acf(x: &[f64], max_lag: usize) -> Result<Vec<f64>, AnalysisError> {
    require_len(PROCEDURE, x, max_lag + 1)?;
    let autocov = autocovariance(x, max_lag);
    if autocov[0] <= 0.0 {
        return Err(AnalysisError::ConstantSample {
            procedure: PROCEDURE,
        });
    }
    Ok(autocov.iter().map(|c| c / autocov[0]).collect())
}

/// Partial autocorrelation by the Yule-Walker equations on the biased
/// autocovariances, solved with the Durbin-Levinson recursion.
///
/// A lag whose recursion breaks down (zero innovation variance) and every lag
/// after it is [`Value::Undefined`].
///
/// # Errors
/// - [`AnalysisError::InsufficientData`] when `max_lag > n / 2`.
/// - [`AnalysisError::ConstantSample`] for a series without variance.
pub fn pacf_yule_walker(x: &[f64], max_lag: usize) -> Result<Vec<Value>, AnalysisError> {
    require_len(PROCEDURE, x, 2 * max_lag)?;
    let rho = acf(x, max_lag)?;

    let mut pacf = vec![Value::Undefined; max_lag + 1];
    pacf[0] = Value::Defined(1.0);

    // phi holds the order-(k-1) AR coefficients phi_{k-1,1..k-1}
    let mut phi: Vec<f64> = Vec::with_capacity(max_lag);
    let mut sigma = 1.0;
    for k in 1..=max_lag {
        let num = rho[k] - phi.iter().enumerate().map(|(j, p)| p * rho[k - 1 - j]).sum::<f64>();
        let kk = num / sigma;
        if !kk.is_finite() || sigma <= 0.0 {
            break;
        }

        let next: Vec<f64> = phi
            .iter()
            .enumerate()
            .map(|(j, p)| p - kk * phi[phi.len() - 1 - j])
            .chain(std::iter::once(kk))
            .collect();
        phi = next;
        sigma *= 1.0 - kk * kk;
        pacf[k] = Value::new(kk);
    }

    Ok(pacf)
}

/// ACF and PACF of `x` up to `max_lag`.
///
/// # Errors
/// See [`pacf_yule_walker`].
pub fn correlogram(x: &[f64], max_lag: usize) -> Result<Correlogram, AnalysisError> {
    let pacf = pacf_yule_walker(x, max_lag)?;
    let acf = acf(x, max_lag)?;
    tracing::debug!("correlogram: n={} lags={max_lag}", x.len());
    Ok(Correlogram { max_lag, acf, pacf })
}

fn autocovariance(x: &[f64], max_lag: usize) -> Vec<f64> {
    let n = x.len() as f64;
    let mean = x.iter().sum::<f64>() / n;
    let centred: Vec<f64> = x.iter().map(|v| v - mean).collect();

    (0..=max_lag)
        .map(|lag| {
            centred[lag..]
                .iter()
                .zip(&centred)
                .map(|(a, b)| a * b)
                .sum::<f64>()
                / n
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_acf_of_short_series() {
        // centred [-1.5, -0.5, 0.5, 1.5]: c0 = 5/4, c1 = (0.75 - 0.25 + 0.75)/4
        let result = acf(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_relative_eq!(result[0], 1.0);
        assert_relative_eq!(result[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(result[2], -0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_pacf_lag_one_equals_acf() {
        let x: Vec<f64> = (0..100).map(|i| f64::from(i % 9) + f64::from(i) * 0.01).collect();
        let rho = acf(&x, 5).unwrap();
        let pacf = pacf_yule_walker(&x, 5).unwrap();
        assert_eq!(pacf[0], Value::Defined(1.0));
        assert_relative_eq!(pacf[1].to_f64(), rho[1], epsilon = 1e-12);
    }

    #[test]
    fn test_pacf_matches_explicit_order_two_solution() {
        let x: Vec<f64> = (0..120)
            .map(|i| (f64::from(i) * 0.7).sin() + f64::from(i % 4) * 0.3)
            .collect();
        let rho = acf(&x, 2).unwrap();
        let pacf = pacf_yule_walker(&x, 2).unwrap();

        let phi22 = (rho[2] - rho[1] * rho[1]) / (1.0 - rho[1] * rho[1]);
        assert_relative_eq!(pacf[2].to_f64(), phi22, epsilon = 1e-12);
    }

    #[test]
    fn test_alternating_series() {
        let x: Vec<f64> = (0..80).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let result = acf(&x, 3).unwrap();
        assert_relative_eq!(result[1], -79.0 / 80.0, epsilon = 1e-12);
        assert_relative_eq!(result[2], 78.0 / 80.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lag_limits() {
        let x: Vec<f64> = (0..79).map(f64::from).collect();
        assert_eq!(
            pacf_yule_walker(&x, DEFAULT_MAX_LAG).unwrap_err(),
            AnalysisError::insufficient(PROCEDURE, 80, 79)
        );
        assert!(matches!(
            acf(&[2.0; 50], 10).unwrap_err(),
            AnalysisError::ConstantSample { .. }
        ));
    }
}
