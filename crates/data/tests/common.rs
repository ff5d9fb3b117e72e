use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use finstat_types::Bar;

/// Renders bars as a provider envelope, newest record first like the live API.
pub fn render_envelope(bars: &[Bar]) -> String {
    let mut records = String::new();
    for (i, bar) in bars.iter().rev().enumerate() {
        if i > 0 {
            records.push(',');
        }
        write!(
            records,
            r#""{}": {{"1. open": "{}", "2. high": "{}", "3. low": "{}", "4. close": "{}", "5. volume": "{}"}}"#,
            bar.date.format("%Y-%m-%d"),
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume
        )
        .unwrap();
    }

    format!(
        r#"{{"Meta Data": {{"1. Information": "Daily Prices", "2. Symbol": "TEST"}}, "Time Series (Daily)": {{{records}}}}}"#
    )
}

pub fn write_envelope(path: &Path, bars: &[Bar]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, render_envelope(bars)).unwrap();
}

pub fn sample_bars() -> Vec<Bar> {
    let start = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap();
    vec![
        Bar::new(start, 128.0, 129.5, 127.2, 129.1, 20_500_000.0),
        Bar::new(
            start + chrono::Days::new(1),
            129.1,
            130.0,
            128.0,
            128.4,
            18_000_000.0,
        ),
        Bar::new(
            start + chrono::Days::new(2),
            128.4,
            131.2,
            128.1,
            130.9,
            22_750_000.0,
        ),
    ]
}
