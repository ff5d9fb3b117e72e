use chrono::NaiveDate;
use finstat_types::Bar;
use proptest::prelude::*;

/// Generates valid daily bar sequences for property tests.
pub fn valid_bar_sequence(len: usize) -> impl Strategy<Value = Vec<Bar>> {
    (
        prop::collection::vec(valid_bar(), len..=len),
        prop::collection::vec(1u64..4, len..=len),
    )
        .prop_map(|(mut bars, gaps)| {
            // Weekends and holidays are simply missing days
            let mut date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
            for (bar, gap) in bars.iter_mut().zip(gaps) {
                bar.date = date;
                date = date + chrono::Days::new(gap);
            }
            bars
        })
}

fn valid_bar() -> impl Strategy<Value = Bar> {
    (
        1.0f64..500.0,  // base price
        0.001..0.05,    // intraday range
        0.0f64..1.0e7,  // volume
    )
        .prop_map(|(base, range, volume)| {
            let spread = base * range;
            Bar {
                date: NaiveDate::MIN, // replaced in valid_bar_sequence
                open: base,
                high: base + spread,
                low: base - spread * 0.5,
                close: base + spread * 0.25,
                volume: volume.round(),
            }
        })
}
