//! Indicator implementations
//!
//! Contains all concrete indicator implementations.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod returns;
pub mod rolling_std;
pub mod rsi;
pub mod sma;
pub mod vwap;
