//! Statistical analyzer over an augmented series.

use finstat_types::{AugmentedSeries, columns, defined_values};

use crate::correlogram::{DEFAULT_MAX_LAG, correlogram};
use crate::decomposition::{TRADING_YEAR, seasonal_decompose};
use crate::descriptive::describe;
use crate::error::AnalysisError;
use crate::location::one_sample_t_test;
use crate::normality::shapiro_wilk;
use crate::report::AnalysisReport;
use crate::stationarity::adf_test;

/// Runs the fixed battery of tests on daily returns and close prices.
///
/// Return-based procedures use only the defined entries of the
/// `Daily Return` column; close-based procedures use every close.
#[derive(Debug, Clone)]
pub struct StatisticalAnalyzer {
    /// Season length for the decomposition
    pub period: usize,
    /// Largest ACF/PACF lag
    pub max_lag: usize,
    /// Mean the returns are tested against
    pub population_mean: f64,
}

impl Default for StatisticalAnalyzer {
    fn default() -> Self {
        Self {
            period: TRADING_YEAR,
            max_lag: DEFAULT_MAX_LAG,
            population_mean: 0.0,
        }
    }
}

impl StatisticalAnalyzer {
    /// Analyzer with a 252-day season and 40 lags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs every procedure on its own input.
    ///
    /// A procedure that rejects its input is recorded as failed in the
    /// report; the others still run.
    ///
    /// # Errors
    /// [`AnalysisError::MissingColumn`] when `Daily Return` is absent.
    pub fn analyze(&self, data: &AugmentedSeries) -> Result<AnalysisReport, AnalysisError> {
        let returns = defined_values(data.require(columns::DAILY_RETURN)?);
        let closes = data.closes();
        tracing::info!(
            "analyzing {} returns and {} closes",
            returns.len(),
            closes.len()
        );

        let report = AnalysisReport {
            descriptive: describe(&returns).into(),
            normality: shapiro_wilk(&returns).into(),
            location: one_sample_t_test(&returns, self.population_mean).into(),
            stationarity: adf_test(&closes).into(),
            decomposition: seasonal_decompose(&closes, self.period).into(),
            correlogram: correlogram(&closes, self.max_lag).into(),
        };

        for (name, failure) in report.failures() {
            tracing::warn!("{name} skipped: {}", failure.message);
        }
        if let (Some(normality), Some(location), Some(stationarity)) = (
            report.normality.completed(),
            report.location.completed(),
            report.stationarity.completed(),
        ) {
            tracing::info!(
                "normality: {} | location: {} | stationarity: {}",
                normality.verdict,
                location.verdict,
                stationarity.verdict
            );
        }
        Ok(report)
    }
}
