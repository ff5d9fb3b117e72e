use std::fmt::Write as _;
use std::path::Path;

use chrono::{Days, NaiveDate};
use finstat_types::Bar;

/// `n` bars with closes growing by a pseudo-random daily rate in [0.1%, 1.1%].
pub fn growth_bars(n: usize) -> Vec<Bar> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let mut close = 100.0;
    let mut seed = 42u64;
    (0..n)
        .map(|i| {
            // Simple LCG for reproducible noise
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let random = f64::from(u32::try_from(seed >> 33).unwrap()) / f64::from(u32::MAX);

            close *= 1.001 + 0.01 * random;
            let volume = 1_000_000.0 + random * 500_000.0;
            Bar::new(
                start + Days::new(i as u64),
                close * 0.995,
                close * 1.01,
                close * 0.99,
                close,
                volume,
            )
        })
        .collect()
}

/// Writes bars as a provider envelope, newest record first.
pub fn write_envelope(path: &Path, bars: &[Bar]) {
    let mut records = String::new();
    for (i, bar) in bars.iter().rev().enumerate() {
        if i > 0 {
            records.push(',');
        }
        write!(
            records,
            r#""{}": {{"1. open": "{}", "2. high": "{}", "3. low": "{}", "4. close": "{}", "5. volume": "{}"}}"#,
            bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
        )
        .unwrap();
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(
        path,
        format!(r#"{{"Meta Data": {{}}, "Time Series (Daily)": {{{records}}}}}"#),
    )
    .unwrap();
}

pub fn config_json(data_file: Option<&Path>, extra: &str) -> String {
    let data_file = data_file
        .map(|p| format!(r#""data_file": {:?},"#, p.display().to_string()))
        .unwrap_or_default();
    format!(r#"{{"schema_version": "1", "symbol": "googl", {data_file} {extra} "logging": {{"level": "debug"}}}}"#)
}
