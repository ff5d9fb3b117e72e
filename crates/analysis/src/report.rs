//! Analysis report: named test results, decomposition and correlogram.

use std::fmt;

use finstat_types::Value;
use serde::{Deserialize, Serialize};

use crate::descriptive::DescriptiveStats;
use crate::error::AnalysisError;

/// Fixed significance level for every verdict.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Outcome of the normality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalityVerdict {
    /// p > 0.05
    Normal,
    /// p <= 0.05
    NotNormal,
}

impl NormalityVerdict {
    /// Verdict for a Shapiro-Wilk p-value.
    #[must_use]
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value > SIGNIFICANCE_LEVEL {
            NormalityVerdict::Normal
        } else {
            NormalityVerdict::NotNormal
        }
    }
}

impl fmt::Display for NormalityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NormalityVerdict::Normal => "Data follows a Normal Distribution.",
            NormalityVerdict::NotNormal => "Data does not follow a Normal Distribution.",
        })
    }
}

/// Outcome of the location test against a zero mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationVerdict {
    /// p < 0.05
    DiffersFromZero,
    /// p >= 0.05
    NotDifferent,
}

impl LocationVerdict {
    /// Verdict for a t-test p-value.
    #[must_use]
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < SIGNIFICANCE_LEVEL {
            LocationVerdict::DiffersFromZero
        } else {
            LocationVerdict::NotDifferent
        }
    }
}

impl fmt::Display for LocationVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LocationVerdict::DiffersFromZero => {
                "The mean return is statistically different from 0."
            }
            LocationVerdict::NotDifferent => {
                "The mean return is not statistically different from 0."
            }
        })
    }
}

/// Outcome of the unit-root test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationarityVerdict {
    /// p <= 0.05
    Stationary,
    /// p > 0.05
    NonStationary,
}

impl StationarityVerdict {
    /// Verdict for an ADF p-value.
    #[must_use]
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value <= SIGNIFICANCE_LEVEL {
            StationarityVerdict::Stationary
        } else {
            StationarityVerdict::NonStationary
        }
    }
}

impl fmt::Display for StationarityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StationarityVerdict::Stationary => "The data is stationary.",
            StationarityVerdict::NonStationary => {
                "The data is non-stationary. Consider differencing or transformations."
            }
        })
    }
}

/// Shapiro-Wilk result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalityTest {
    /// W statistic in (0, 1]
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    /// Verdict at [`SIGNIFICANCE_LEVEL`]
    pub verdict: NormalityVerdict,
}

/// One-sample t-test result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTest {
    /// t statistic
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Hypothesised mean
    pub population_mean: f64,
    /// Verdict at [`SIGNIFICANCE_LEVEL`]
    pub verdict: LocationVerdict,
}

/// ADF critical values for the test statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalValues {
    /// 1% level
    #[serde(rename = "1%")]
    pub one_percent: f64,
    /// 5% level
    #[serde(rename = "5%")]
    pub five_percent: f64,
    /// 10% level
    #[serde(rename = "10%")]
    pub ten_percent: f64,
}

/// Augmented Dickey-Fuller result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationarityTest {
    /// t-value of the lagged level coefficient
    pub statistic: f64,
    /// MacKinnon approximate p-value
    pub p_value: f64,
    /// Lagged differences kept after AIC selection
    pub used_lag: usize,
    /// Observations in the final regression
    pub nobs: usize,
    /// Critical values for `nobs`
    pub critical_values: CriticalValues,
    /// Verdict at [`SIGNIFICANCE_LEVEL`]
    pub verdict: StationarityVerdict,
}

/// Multiplicative decomposition `observed = trend * seasonal * resid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Season length in observations
    pub period: usize,
    /// Centred moving average; undefined at both edges
    pub trend: Vec<Value>,
    /// Periodic index with mean 1 over one period
    pub seasonal: Vec<Value>,
    /// `observed / (trend * seasonal)`
    pub resid: Vec<Value>,
}

/// Autocorrelation and partial autocorrelation, lags `0..=max_lag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlogram {
    /// Largest lag
    pub max_lag: usize,
    /// Autocorrelation per lag; `acf[0] == 1`
    pub acf: Vec<f64>,
    /// Partial autocorrelation per lag (Yule-Walker, MLE autocovariances)
    pub pacf: Vec<Value>,
}

/// Why a procedure produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureFailure {
    /// Failure kind, see [`AnalysisError::kind`]
    pub kind: String,
    /// Human-readable reason
    pub message: String,
    /// Procedure that rejected its input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub procedure: Option<String>,
    /// Minimum observations, for `insufficient_data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<usize>,
    /// Observations available, for `insufficient_data`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<usize>,
}

impl From<&AnalysisError> for ProcedureFailure {
    fn from(err: &AnalysisError) -> Self {
        let (required, available) = match err {
            AnalysisError::InsufficientData {
                required,
                available,
                ..
            } => (Some(*required), Some(*available)),
            _ => (None, None),
        };
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
            procedure: err.procedure().map(str::to_string),
            required,
            available,
        }
    }
}

/// Result of one procedure within a report.
///
/// Serialized with a `status` tag next to the procedure's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcedureOutcome<T> {
    /// The procedure ran
    Completed(T),
    /// The procedure rejected its input
    Failed(ProcedureFailure),
}

impl<T> ProcedureOutcome<T> {
    /// The procedure's output, if it ran.
    #[must_use]
    pub fn completed(&self) -> Option<&T> {
        match self {
            ProcedureOutcome::Completed(value) => Some(value),
            ProcedureOutcome::Failed(_) => None,
        }
    }

    /// The failure, if the procedure did not run.
    #[must_use]
    pub fn failure(&self) -> Option<&ProcedureFailure> {
        match self {
            ProcedureOutcome::Completed(_) => None,
            ProcedureOutcome::Failed(failure) => Some(failure),
        }
    }

    /// Returns true when the procedure ran.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, ProcedureOutcome::Completed(_))
    }
}

impl<T> From<Result<T, AnalysisError>> for ProcedureOutcome<T> {
    fn from(result: Result<T, AnalysisError>) -> Self {
        match result {
            Ok(value) => ProcedureOutcome::Completed(value),
            Err(err) => ProcedureOutcome::Failed(ProcedureFailure::from(&err)),
        }
    }
}

/// Everything the analyzer produces for one series.
///
/// Each procedure checks its own minimum, so a short series can still carry
/// the tests it is long enough for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Summary of daily returns
    pub descriptive: ProcedureOutcome<DescriptiveStats>,
    /// Shapiro-Wilk on daily returns
    pub normality: ProcedureOutcome<NormalityTest>,
    /// t-test of daily returns against zero
    pub location: ProcedureOutcome<LocationTest>,
    /// ADF on close
    pub stationarity: ProcedureOutcome<StationarityTest>,
    /// Seasonal decomposition of close
    pub decomposition: ProcedureOutcome<Decomposition>,
    /// ACF/PACF of close
    pub correlogram: ProcedureOutcome<Correlogram>,
}

impl AnalysisReport {
    /// Failed procedures by report field name.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &ProcedureFailure)> {
        [
            ("descriptive", self.descriptive.failure()),
            ("normality", self.normality.failure()),
            ("location", self.location.failure()),
            ("stationarity", self.stationarity.failure()),
            ("decomposition", self.decomposition.failure()),
            ("correlogram", self.correlogram.failure()),
        ]
        .into_iter()
        .filter_map(|(name, failure)| failure.map(|f| (name, f)))
    }

    /// Returns true when every procedure ran.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_edges() {
        assert_eq!(
            NormalityVerdict::from_p_value(0.05),
            NormalityVerdict::NotNormal
        );
        assert_eq!(
            LocationVerdict::from_p_value(0.05),
            LocationVerdict::NotDifferent
        );
        assert_eq!(
            StationarityVerdict::from_p_value(0.05),
            StationarityVerdict::Stationary
        );
    }

    #[test]
    fn test_verdicts_serialize_snake_case() {
        let json = serde_json::to_string(&LocationVerdict::DiffersFromZero).unwrap();
        assert_eq!(json, "\"differs_from_zero\"");
        assert_eq!(
            StationarityVerdict::NonStationary.to_string(),
            "The data is non-stationary. Consider differencing or transformations."
        );
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let completed: ProcedureOutcome<CriticalValues> = Ok(CriticalValues {
            one_percent: -3.4,
            five_percent: -2.8,
            ten_percent: -2.5,
        })
        .into();
        let json = serde_json::to_value(&completed).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["10%"], -2.5);

        let failed: ProcedureOutcome<CriticalValues> =
            Err(AnalysisError::insufficient("adf", 10, 4)).into();
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["kind"], "insufficient_data");
        assert_eq!(json["procedure"], "adf");
        assert_eq!(json["required"], 10);
        assert_eq!(json["available"], 4);

        let back: ProcedureOutcome<CriticalValues> = serde_json::from_value(json).unwrap();
        assert_eq!(back, failed);
        assert!(back.completed().is_none());
    }

    #[test]
    fn test_critical_values_keys() {
        let cv = CriticalValues {
            one_percent: -3.4,
            five_percent: -2.8,
            ten_percent: -2.5,
        };
        let json = serde_json::to_value(cv).unwrap();
        assert_eq!(json["5%"], -2.8);
    }
}
