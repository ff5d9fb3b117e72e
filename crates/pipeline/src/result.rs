//! Result envelope returned by the runner.

use chrono::NaiveDate;
use finstat_analysis::AnalysisReport;
use finstat_types::TableRow;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorResult, PipelineError};

/// Output of one pipeline run.
///
/// `ok: true` results carry `meta` and, depending on the config, `table` and
/// `report`; `ok: false` results carry only `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Whether the run completed
    pub ok: bool,
    /// Error information when `ok` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResult>,
    /// Instrument identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Run metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResultMeta>,
    /// One row per bar with every indicator column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Vec<TableRow>>,
    /// Statistical analysis of the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
}

/// Run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMeta {
    /// Wall-clock duration of the run
    #[serde(default)]
    pub runtime_seconds: f64,
    /// Number of bars processed
    pub bars_processed: usize,
    /// First date of the series
    pub first_date: NaiveDate,
    /// Last date of the series
    pub last_date: NaiveDate,
    /// Indicator column names, sorted
    pub columns: Vec<String>,
}

impl PipelineResult {
    /// Failed result for `err`.
    #[must_use]
    pub fn from_error(err: PipelineError) -> Self {
        Self {
            ok: false,
            error: Some(ErrorResult::from(err)),
            symbol: None,
            meta: None,
            table: None,
            report: None,
        }
    }
}

/// Serializes a pipeline error into a JSON `ok: false` response.
#[must_use]
pub fn serialize_error(err: PipelineError) -> String {
    serde_json::to_string(&PipelineResult::from_error(err)).unwrap_or_else(|_| {
        r#"{"ok":false,"error":{"category":"runtime","message":"serialization_failed"}}"#
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_result_omits_empty_parts() {
        let json = serialize_error(PipelineError::Runtime("boom".to_string()));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["category"], "runtime");
        assert!(value.get("table").is_none());
        assert!(value.get("report").is_none());
    }
}
