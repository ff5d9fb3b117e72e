//! Shapiro-Wilk test for normality.
//!
//! Coefficients and the p-value approximation follow Royston (1995),
//! Algorithm AS R94: exact for n = 3, a polynomial fit of `-ln(gamma - ln(1 - W))`
//! for 4 <= n <= 11, and a log-normal fit of `ln(1 - W)` from n = 12 on.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{AnalysisError, distribution_error, require_len};
use crate::report::{NormalityTest, NormalityVerdict};

const PROCEDURE: &str = "shapiro_wilk";
const MIN_OBSERVATIONS: usize = 3;
/// Above this size the p-value approximation is no longer validated.
const MAX_VALIDATED: usize = 5000;
/// Reported when `ln(1 - W)` lies beyond the small-sample bound.
const TINY_P: f64 = 1e-99;

const C1: [f64; 6] = [0.0, 0.221_157, -0.147_981, -2.071_190, 4.434_685, -2.706_056];
const C2: [f64; 6] = [0.0, 0.042_981, -0.293_762, -1.752_461, 5.682_633, -3.582_633];
const C3: [f64; 4] = [0.5440, -0.399_78, 0.025_054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.778_57, 0.062_767, -0.002_032_2];
const C5: [f64; 4] = [-1.5861, -0.310_82, -0.083_751, 0.003_891_5];
const C6: [f64; 3] = [-0.4803, -0.082_676, 0.003_030_2];
const G: [f64; 2] = [-2.273, 0.459];

/// Evaluates `c[0] + c[1] x + c[2] x^2 + ...`.
pub(crate) fn poly(coefs: &[f64], x: f64) -> f64 {
    coefs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Runs the Shapiro-Wilk test on `data`.
///
/// # Errors
/// - [`AnalysisError::InsufficientData`] for fewer than 3 observations.
/// - [`AnalysisError::ConstantSample`] when all observations are equal.
pub fn shapiro_wilk(data: &[f64]) -> Result<NormalityTest, AnalysisError> {
    require_len(PROCEDURE, data, MIN_OBSERVATIONS)?;
    if data.len() > MAX_VALIDATED {
        tracing::warn!(
            "shapiro_wilk: p-value may be inaccurate for n = {} > {MAX_VALIDATED}",
            data.len()
        );
    }

    let mut x = data.to_vec();
    x.sort_by(f64::total_cmp);
    let n = x.len();
    if x[n - 1] - x[0] <= 0.0 {
        return Err(AnalysisError::ConstantSample {
            procedure: PROCEDURE,
        });
    }

    let normal = Normal::new(0.0, 1.0).map_err(distribution_error)?;
    let a = coefficients(n, &normal);

    let mean = x.iter().sum::<f64>() / n as f64;
    let ss: f64 = x.iter().map(|v| (v - mean).powi(2)).sum();
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, ai)| ai * (x[n - 1 - i] - x[i]))
        .sum();
    let statistic = (numerator.powi(2) / ss).min(1.0);
    let p_value = p_value(statistic, n, &normal);

    tracing::debug!("shapiro_wilk: n={n} W={statistic:.6} p={p_value:.6}");
    Ok(NormalityTest {
        statistic,
        p_value,
        verdict: NormalityVerdict::from_p_value(p_value),
    })
}

/// Antisymmetric weights for the lower half of the order statistics,
/// normalised so the full weight vector has unit length.
fn coefficients(n: usize, normal: &Normal) -> Vec<f64> {
    let half = n / 2;
    if n == 3 {
        return vec![std::f64::consts::FRAC_1_SQRT_2];
    }

    let an = n as f64;
    // Expected normal order statistics, lower half (negative)
    let m: Vec<f64> = (1..=half)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / (an + 0.25)))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();

    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    let mut a: Vec<f64> = m.clone();
    let first_scaled = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        let fac = ((summ2 - 2.0 * m[0].powi(2) - 2.0 * m[1].powi(2))
            / (1.0 - 2.0 * a1.powi(2) - 2.0 * a2.powi(2)))
        .sqrt();
        a[1] = a2;
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0].powi(2)) / (1.0 - 2.0 * a1.powi(2))).sqrt();
        (1, fac)
    };
    a[0] = a1;

    let (start, fac) = first_scaled;
    for ai in &mut a[start..] {
        *ai = -*ai / fac;
    }
    a
}

fn p_value(w: f64, n: usize, normal: &Normal) -> f64 {
    if n == 3 {
        let pw = 6.0 / std::f64::consts::PI * (w.sqrt().asin() - std::f64::consts::FRAC_PI_3);
        return pw.max(0.0);
    }

    let an = n as f64;
    let w1 = (1.0 - w).ln();
    let (z, m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if w1 >= gamma {
            return TINY_P;
        }
        (-(gamma - w1).ln(), poly(&C3, an), poly(&C4, an).exp())
    } else {
        let ln_n = an.ln();
        (w1, poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };

    1.0 - normal.cdf((z - m) / s)
}
