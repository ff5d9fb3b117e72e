//! Integration tests for the pipeline runner.

mod common;

use common::{config_json, growth_bars, write_envelope};
use finstat_pipeline::{PipelineError, PipelineResult, execute, run_pipeline_from_json};
use finstat_types::columns;

fn parse(result_json: &str) -> PipelineResult {
    serde_json::from_str(result_json).unwrap()
}

#[test]
fn test_full_run_from_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GOOGL_daily.json");
    write_envelope(&path, &growth_bars(600));

    let result = parse(&run_pipeline_from_json(&config_json(Some(&path), "")).unwrap());

    assert!(result.ok);
    assert_eq!(result.symbol.as_deref(), Some("GOOGL"));

    let meta = result.meta.unwrap();
    assert_eq!(meta.bars_processed, 600);
    assert_eq!(meta.columns.len(), columns::INDICATOR_COLUMNS.len());

    let table = result.table.unwrap();
    assert_eq!(table.len(), 600);
    assert!(table[0].indicators[columns::DAILY_RETURN].is_undefined());
    assert!(table[599].indicators[columns::MA50].is_defined());

    let report = result.report.unwrap();
    assert!(report.is_complete());
    assert_eq!(report.descriptive.completed().unwrap().count, 599);
    assert_eq!(report.correlogram.completed().unwrap().acf.len(), 41);
}

#[test]
fn test_table_and_analysis_can_be_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.json");
    write_envelope(&path, &growth_bars(30));

    let config = config_json(
        Some(&path),
        r#""run_analysis": false, "include_table": false,"#,
    );
    let output = run_pipeline_from_json(&config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["ok"], true);
    assert!(value.get("table").is_none());
    assert!(value.get("report").is_none());
    assert_eq!(value["meta"]["first_date"], "2020-01-02");
}

#[test]
fn test_default_data_path_uses_data_root() {
    let dir = tempfile::tempdir().unwrap();
    write_envelope(&dir.path().join("GOOGL").join("GOOGL_daily.json"), &growth_bars(40));

    temp_env::with_var("FINSTAT_DATA_ROOT", Some(dir.path()), || {
        let config = config_json(None, r#""run_analysis": false,"#);
        let result = parse(&run_pipeline_from_json(&config).unwrap());
        assert!(result.ok);
        assert_eq!(result.meta.unwrap().bars_processed, 40);
    });
}

#[test]
fn test_short_series_reports_failed_procedure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.json");
    write_envelope(&path, &growth_bars(100));

    let output = execute(&config_json(Some(&path), "")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["ok"], true);
    assert_eq!(value["report"]["decomposition"]["status"], "failed");
    assert_eq!(value["report"]["decomposition"]["procedure"], "seasonal_decompose");
    assert_eq!(value["report"]["decomposition"]["required"], 504);
    assert_eq!(value["report"]["stationarity"]["status"], "completed");

    let report = parse(&output).report.unwrap();
    assert!(report.normality.is_completed());
    assert!(report.correlogram.is_completed());
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_missing_file_reports_market_data_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = run_pipeline_from_json(&config_json(Some(&path), "")).unwrap_err();
    assert!(matches!(err, PipelineError::Data(_)));

    let result = parse(&execute(&config_json(Some(&path), "")).unwrap());
    assert!(!result.ok);
    assert_eq!(result.error.unwrap().category, "market_data");
}

#[test]
fn test_config_errors_are_returned_as_err() {
    let err = execute("{not json").unwrap_err();
    assert!(matches!(err, PipelineError::ConfigParse(_)));

    let err = execute(r#"{"schema_version": "9", "symbol": "GOOGL"}"#).unwrap_err();
    assert!(matches!(err, PipelineError::ConfigValidation(ref msg) if msg.contains("schema_version")));
}
