//! Indicator column names of an augmented series.

/// Close price (always present, read from the bars).
pub const CLOSE: &str = "Close";
/// 10-day simple moving average of close.
pub const MA10: &str = "MA10";
/// 50-day simple moving average of close.
pub const MA50: &str = "MA50";
/// 20-day simple moving average of close (Bollinger middle band).
pub const SMA20: &str = "SMA20";
/// 10-day rolling sample standard deviation of close.
pub const STD10: &str = "STD10";
/// 20-day rolling sample standard deviation of close.
pub const STD_DEV: &str = "StdDev";
/// SMA20 + 2 * `StdDev`.
pub const UPPER_BAND: &str = "Upper Band";
/// SMA20 - 2 * `StdDev`.
pub const LOWER_BAND: &str = "Lower Band";
/// Simple percentage change of close.
pub const DAILY_RETURN: &str = "Daily Return";
/// Close relative to the first close, minus one.
pub const CUMULATIVE_RETURN: &str = "Cumulative Return";
/// 14-day relative strength index.
pub const RSI: &str = "RSI";
/// 12-span exponential moving average of close.
pub const EMA12: &str = "EMA12";
/// 26-span exponential moving average of close.
pub const EMA26: &str = "EMA26";
/// EMA12 - EMA26.
pub const MACD: &str = "MACD";
/// Cumulative volume-weighted average price.
pub const VWAP: &str = "VWAP";

/// Every column the indicator engine produces.
pub const INDICATOR_COLUMNS: [&str; 14] = [
    MA10,
    MA50,
    SMA20,
    STD10,
    STD_DEV,
    UPPER_BAND,
    LOWER_BAND,
    DAILY_RETURN,
    CUMULATIVE_RETURN,
    RSI,
    EMA12,
    EMA26,
    MACD,
    VWAP,
];
