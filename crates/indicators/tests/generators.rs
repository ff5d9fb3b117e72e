use chrono::{Days, NaiveDate};
use finstat_types::Bar;
use proptest::prelude::*;

/// Random walk of positive closes with non-negative volumes.
pub fn bar_sequence(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<Bar>> {
    (
        10.0f64..500.0,
        prop::collection::vec((-0.05f64..0.05, 0.0f64..1e6), min_len..=max_len),
    )
        .prop_map(|(start_price, steps)| {
            let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let mut close = start_price;
            steps
                .into_iter()
                .enumerate()
                .map(|(i, (change, volume))| {
                    close *= 1.0 + change;
                    Bar::new(start + Days::new(i as u64), close, close, close, close, volume)
                })
                .collect()
        })
}
