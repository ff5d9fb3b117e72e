//! High-level pipeline runner helpers.

use std::time::Instant;

use finstat_analysis::StatisticalAnalyzer;
use finstat_data::load_daily_envelope;
use finstat_indicators::IndicatorEngine;
use finstat_types::Series;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::result::{PipelineResult, ResultMeta, serialize_error};

/// Main entry point: receives config JSON, returns result JSON.
///
/// # Errors
/// - [`PipelineError::ConfigParse`] when JSON parsing fails.
/// - [`PipelineError::ConfigValidation`] for invalid configuration values.
/// - Any error from loading, indicator computation or analysis.
pub fn run_pipeline_from_json(config_json: &str) -> Result<String, PipelineError> {
    let config = PipelineConfig::from_json(config_json)?.validated()?;

    let path = config.data_path();
    tracing::info!("loading {} from {}", config.symbol, path.display());
    let series = load_daily_envelope(&path)?;

    let result = run_pipeline(&config, &series)?;
    serde_json::to_string(&result).map_err(|e| PipelineError::ResultSerialize(e.to_string()))
}

/// Like [`run_pipeline_from_json`], but only config errors are returned as
/// `Err`; every other failure is reported as an `ok: false` result.
///
/// # Errors
/// [`PipelineError::ConfigParse`] and [`PipelineError::ConfigValidation`].
pub fn execute(config_json: &str) -> Result<String, PipelineError> {
    match run_pipeline_from_json(config_json) {
        Ok(result_json) => Ok(result_json),
        Err(err) if err.is_config_error() => Err(err),
        Err(err) => {
            tracing::warn!("pipeline failed: {err}");
            Ok(serialize_error(err))
        }
    }
}

/// Runs indicators and, if configured, the analyzer on a loaded series.
///
/// # Errors
/// [`PipelineError::Indicator`] or [`PipelineError::Analysis`].
pub fn run_pipeline(
    config: &PipelineConfig,
    series: &Series,
) -> Result<PipelineResult, PipelineError> {
    let started = Instant::now();

    let augmented = IndicatorEngine::new().compute(series)?;
    let report = if config.run_analysis {
        Some(StatisticalAnalyzer::new().analyze(&augmented)?)
    } else {
        None
    };

    let (first_date, last_date) = series
        .date_range()
        .ok_or_else(|| PipelineError::Runtime("series has no bars".to_string()))?;
    let meta = ResultMeta {
        runtime_seconds: started.elapsed().as_secs_f64(),
        bars_processed: series.len(),
        first_date,
        last_date,
        columns: augmented.column_names().map(str::to_string).collect(),
    };
    tracing::info!(
        "{}: {} bars, analysis {}",
        config.symbol,
        meta.bars_processed,
        match &report {
            Some(report) if report.is_complete() => "done",
            Some(_) => "partial",
            None => "skipped",
        }
    );

    Ok(PipelineResult {
        ok: true,
        error: None,
        symbol: Some(config.symbol.clone()),
        meta: Some(meta),
        table: config.include_table.then(|| augmented.to_rows()),
        report,
    })
}
