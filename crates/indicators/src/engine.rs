//! Indicator engine: one pass that attaches every indicator column.

use finstat_types::{AugmentedSeries, Bar, Series, Value, columns};

use crate::error::IndicatorError;
use crate::impl_::{
    bollinger::BollingerBands,
    macd::MACD,
    returns::{CumulativeReturn, DailyReturn},
    rolling_std::RollingStd,
    rsi::RSI,
    sma::SMA,
    vwap::VWAP,
};
use crate::traits::{Indicator, IntoMultiVecs, MultiOutputIndicator};

/// Short moving average window.
pub const MA_SHORT: usize = 10;
/// Long moving average window.
pub const MA_LONG: usize = 50;
/// Short rolling deviation window.
pub const STD_SHORT: usize = 10;
/// Bollinger window.
pub const BOLLINGER_PERIOD: usize = 20;
/// Bollinger band width in standard deviations.
pub const BOLLINGER_K: f64 = 2.0;
/// RSI averaging window.
pub const RSI_PERIOD: usize = 14;
/// Fast EMA span for MACD.
pub const EMA_FAST: usize = 12;
/// Slow EMA span for MACD.
pub const EMA_SLOW: usize = 26;

/// Computes the fixed indicator set over a daily series.
///
/// Pure: the input series is not modified, and the output holds one column
/// per name in [`columns::INDICATOR_COLUMNS`], each aligned with the bars.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Creates the engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validates raw bars, then computes all indicators.
    ///
    /// # Errors
    /// [`IndicatorError::InvalidInput`] when the bars violate the series contract.
    pub fn compute_bars(&self, bars: Vec<Bar>) -> Result<AugmentedSeries, IndicatorError> {
        let series = Series::new(bars)?;
        self.compute(&series)
    }

    /// Computes all indicators for an already validated series.
    ///
    /// # Errors
    /// Only on an internal length mismatch between a column and the series,
    /// reported as [`IndicatorError::InvalidInput`].
    pub fn compute(&self, series: &Series) -> Result<AugmentedSeries, IndicatorError> {
        let bars = series.bars();

        let mut out = vec![
            single(columns::MA10, &SMA::new(MA_SHORT), bars),
            single(columns::MA50, &SMA::new(MA_LONG), bars),
            single(columns::STD10, &RollingStd::new(STD_SHORT), bars),
        ];
        out.extend(multi(
            &BollingerBands::new(BOLLINGER_PERIOD, BOLLINGER_K),
            bars,
            &[
                columns::UPPER_BAND,
                columns::SMA20,
                columns::LOWER_BAND,
                columns::STD_DEV,
            ],
        ));
        out.push(single(columns::DAILY_RETURN, &DailyReturn, bars));
        out.push(single(columns::CUMULATIVE_RETURN, &CumulativeReturn, bars));
        out.push(single(columns::RSI, &RSI::new(RSI_PERIOD), bars));
        out.extend(multi(
            &MACD::new(EMA_FAST, EMA_SLOW),
            bars,
            &[columns::EMA12, columns::EMA26, columns::MACD],
        ));
        out.push(single(columns::VWAP, &VWAP, bars));

        let mut augmented = AugmentedSeries::new(series.clone());
        for column in out {
            tracing::debug!(
                "{} <- {} (warmup {}): {} of {} values defined",
                column.name,
                column.source,
                column.warmup,
                column.values.iter().filter(|v| v.is_defined()).count(),
                column.values.len()
            );
            augmented = augmented.with_column(column.name, column.values)?;
        }

        tracing::info!(
            "computed {} indicator columns over {} bars",
            columns::INDICATOR_COLUMNS.len(),
            bars.len()
        );
        Ok(augmented)
    }
}

/// One computed column and the indicator it came from.
struct ColumnOutput {
    name: &'static str,
    source: String,
    warmup: usize,
    values: Vec<Value>,
}

fn single(name: &'static str, indicator: &impl Indicator, bars: &[Bar]) -> ColumnOutput {
    ColumnOutput {
        name,
        source: indicator.name().to_string(),
        warmup: indicator.warmup_periods(),
        values: indicator.compute(bars),
    }
}

/// Maps the outputs of `indicator` onto `names`, in `output_names` order.
fn multi<M: MultiOutputIndicator>(
    indicator: &M,
    bars: &[Bar],
    names: &[&'static str],
) -> Vec<ColumnOutput> {
    debug_assert_eq!(names.len(), indicator.output_names().len());
    let warmup = indicator.warmup_periods();
    names
        .iter()
        .copied()
        .zip(indicator.output_names())
        .zip(indicator.compute_all(bars).into_vecs())
        .map(|((name, output), values)| ColumnOutput {
            name,
            source: format!("{}.{output}", indicator.name()),
            warmup,
            values,
        })
        .collect()
}
