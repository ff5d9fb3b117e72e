//! Finstat Indicators
//!
//! Technical indicator engine for daily bar series.
//! Turns a validated [`finstat_types::Series`] into an
//! [`finstat_types::AugmentedSeries`] carrying every indicator column.
//!
//! # Features
//! - Indicator trait with vectorized computation
//! - Multi-output indicators (Bollinger Bands, MACD)
//! - Explicit `Undefined` cells for warmup windows and 0/0 ratios
//!
//! # Available Indicators
//! - SMA: Simple Moving Average
//! - Rolling StdDev: sample standard deviation (N-1)
//! - Bollinger Bands: Upper, Middle, Lower bands
//! - Daily / Cumulative Return
//! - RSI: Relative Strength Index (simple rolling averages)
//! - EMA / MACD
//! - VWAP: cumulative Volume-Weighted Average Price

pub mod engine;
pub mod error;
pub mod impl_;
pub mod rolling;
pub mod traits;

// Re-export main types
pub use engine::IndicatorEngine;
pub use error::IndicatorError;
pub use traits::{Indicator, IntoMultiVecs, MultiOutputIndicator};

// Re-export indicator implementations
pub use impl_::{
    bollinger::{BollingerBands, BollingerResult},
    ema::EMA,
    macd::{MACD, MacdResult},
    returns::{CumulativeReturn, DailyReturn},
    rolling_std::RollingStd,
    rsi::RSI,
    sma::SMA,
    vwap::VWAP,
};
