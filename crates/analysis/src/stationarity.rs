//! Augmented Dickey-Fuller unit-root test (constant, no trend).
//!
//! Regression: `dx[t] = c + gamma * x[t] + sum_j phi_j * dx[t-j] + e[t]`.
//! The number of lagged differences is chosen by AIC over a common sample,
//! then the chosen model is refit on the longest sample it allows.

use nalgebra::{DMatrix, DVector};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{AnalysisError, distribution_error, require_len};
use crate::normality::poly;
use crate::report::{CriticalValues, StationarityTest, StationarityVerdict};

const PROCEDURE: &str = "adf";
const MIN_OBSERVATIONS: usize = 10;
/// Residual sum of squares relative to the response below which a fit is exact.
const EXACT_FIT_TOL: f64 = 1e-20;
/// Level coefficient of an exact fit treated as zero.
const EXACT_GAMMA_TOL: f64 = 1e-9;

// MacKinnon (1994) response surface, constant only, one variable
const TAU_MAX: f64 = 2.74;
const TAU_MIN: f64 = -18.83;
const TAU_STAR: f64 = -1.61;
const TAU_SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038_269];
const TAU_LARGE_P: [f64; 4] = [1.7339, 0.932_02, -0.127_45, -0.010_368];

// MacKinnon (2010) critical values, polynomial in 1/nobs
const CRIT_1: [f64; 4] = [-3.430_35, -6.5393, -16.786, -79.433];
const CRIT_5: [f64; 4] = [-2.861_54, -2.8903, -4.234, -40.04];
const CRIT_10: [f64; 4] = [-2.566_77, -1.5384, -2.809, 0.0];

/// Least-squares fit of one ADF regression.
struct OlsFit {
    beta: DVector<f64>,
    ssr: f64,
    /// `(X'X)^+`, the unscaled coefficient covariance
    cov: DMatrix<f64>,
    rank: usize,
    nobs: usize,
    /// Sum of squares of the response
    yy: f64,
}

impl OlsFit {
    fn aic(&self) -> f64 {
        let n = self.nobs as f64;
        n * (self.ssr / n).ln() + 2.0 * self.rank as f64
    }

    /// Residuals vanish up to rounding: the differences are a deterministic
    /// function of the regressors.
    fn is_exact(&self) -> bool {
        self.ssr <= EXACT_FIT_TOL * self.yy
    }

    /// t-value of coefficient `idx`.
    fn t_value(&self, idx: usize) -> f64 {
        let dof = (self.nobs - self.rank) as f64;
        let se = (self.ssr / dof * self.cov[(idx, idx)]).sqrt();
        self.beta[idx] / se
    }
}

/// Runs the ADF test with AIC lag selection.
///
/// Regressions are solved through the pseudo-inverse, so collinear lag
/// columns do not abort the test. Lags whose regression fits exactly carry no
/// residual variance to compare and are left out of the AIC search. When the
/// chosen regression itself is exact, the statistic saturates at the bound of
/// the p-value table in the direction of the level coefficient, or is 0 when
/// that coefficient vanishes (a deterministic trend shows no mean reversion).
///
/// # Errors
/// - [`AnalysisError::InsufficientData`] for fewer than 10 observations.
/// - [`AnalysisError::ConstantSample`] for a constant series.
/// - [`AnalysisError::Singular`] when the final regression cannot be solved.
pub fn adf_test(x: &[f64]) -> Result<StationarityTest, AnalysisError> {
    require_len(PROCEDURE, x, MIN_OBSERVATIONS)?;
    let (lo, hi) = x
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if hi - lo <= 0.0 {
        return Err(AnalysisError::ConstantSample {
            procedure: PROCEDURE,
        });
    }

    let max_lag = max_lag(x.len());
    let dx: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

    // AIC over a common sample starting at max_lag; ties keep the shorter model
    let mut best: Option<(f64, usize)> = None;
    for lag in 0..=max_lag {
        let Some(fit) = fit_lag(x, &dx, lag, max_lag) else {
            tracing::debug!("adf: lag {lag} has no solution, skipped");
            continue;
        };
        if fit.is_exact() {
            tracing::debug!("adf: lag {lag} fits exactly, skipped");
            continue;
        }
        let aic = fit.aic();
        if best.is_none_or(|(best_aic, _)| aic < best_aic) {
            best = Some((aic, lag));
        }
    }
    let used_lag = best.map_or(0, |(_, lag)| lag);

    let fit = fit_lag(x, &dx, used_lag, used_lag).ok_or(AnalysisError::Singular {
        procedure: PROCEDURE,
    })?;
    let statistic = if fit.is_exact() {
        exact_fit_statistic(fit.beta[1])
    } else {
        fit.t_value(1)
    };
    if !statistic.is_finite() {
        return Err(AnalysisError::Singular {
            procedure: PROCEDURE,
        });
    }
    let p_value = mackinnon_p_value(statistic)?;
    let critical_values = critical_values(fit.nobs);

    tracing::debug!(
        "adf: stat={statistic:.4} p={p_value:.4} lag={used_lag}/{max_lag} nobs={}",
        fit.nobs
    );
    Ok(StationarityTest {
        statistic,
        p_value,
        used_lag,
        nobs: fit.nobs,
        critical_values,
        verdict: StationarityVerdict::from_p_value(p_value),
    })
}

/// Schwert's rule `ceil(12 * (n/100)^(1/4))`, capped so the regression keeps
/// enough rows.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn max_lag(n: usize) -> usize {
    let schwert = (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize;
    schwert.min((n / 2).saturating_sub(2))
}

fn exact_fit_statistic(gamma: f64) -> f64 {
    if gamma < -EXACT_GAMMA_TOL {
        TAU_MIN
    } else if gamma > EXACT_GAMMA_TOL {
        TAU_MAX
    } else {
        0.0
    }
}

/// Regresses `dx[t]` on `[1, x[t], dx[t-1..=t-lag]]` for `t` in `start..dx.len()`.
fn fit_lag(x: &[f64], dx: &[f64], lag: usize, start: usize) -> Option<OlsFit> {
    let rows = dx.len() - start;
    let design = DMatrix::from_fn(rows, lag + 2, |r, c| {
        let t = start + r;
        match c {
            0 => 1.0,
            1 => x[t],
            j => dx[t - (j - 1)],
        }
    });
    let y = DVector::from_column_slice(&dx[start..]);
    ols(&y, &design)
}

/// Minimum-norm least squares via the SVD pseudo-inverse.
fn ols(y: &DVector<f64>, x: &DMatrix<f64>) -> Option<OlsFit> {
    let (nobs, ncols) = x.shape();
    if nobs <= ncols {
        return None;
    }

    let svd = x.clone().svd(true, true);
    let tol = svd.singular_values.max() * nobs as f64 * f64::EPSILON;
    let rank = svd.singular_values.iter().filter(|&&sv| sv > tol).count();
    if rank == 0 {
        return None;
    }
    let pinv = svd.pseudo_inverse(tol).ok()?;

    let beta = &pinv * y;
    let resid = y - x * &beta;
    let ssr = resid.norm_squared();

    ssr.is_finite().then(|| OlsFit {
        cov: &pinv * pinv.transpose(),
        beta,
        ssr,
        rank,
        nobs,
        yy: y.norm_squared(),
    })
}

/// Approximate p-value of the ADF statistic.
fn mackinnon_p_value(stat: f64) -> Result<f64, AnalysisError> {
    if stat > TAU_MAX {
        return Ok(1.0);
    }
    if stat < TAU_MIN {
        return Ok(0.0);
    }
    let coefs: &[f64] = if stat <= TAU_STAR {
        &TAU_SMALL_P
    } else {
        &TAU_LARGE_P
    };
    let normal = Normal::new(0.0, 1.0).map_err(distribution_error)?;
    Ok(normal.cdf(poly(coefs, stat)))
}

fn critical_values(nobs: usize) -> CriticalValues {
    let inv = 1.0 / nobs as f64;
    CriticalValues {
        one_percent: poly(&CRIT_1, inv),
        five_percent: poly(&CRIT_5, inv),
        ten_percent: poly(&CRIT_10, inv),
    }
}
