//! Benchmarks for the indicator engine.
//!
//! Run with: `cargo bench -p finstat_indicators`

use std::hint::black_box;

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use finstat_indicators::{Indicator, IndicatorEngine, RSI, SMA};
use finstat_types::{Bar, Series};

fn generate_bars(n: usize) -> Vec<Bar> {
    // Simple LCG for reproducible pseudo-random walks
    let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap();
    let mut price = 100.0;
    let mut seed = 42u64;

    (0..n)
        .map(|i| {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let upper_bits = u32::try_from(seed >> 33).unwrap_or(0);
            let random = f64::from(upper_bits) / f64::from(u32::MAX);

            // Price change: -1% to +1%
            price *= 1.0 + (random - 0.5) * 0.02;
            Bar::new(start + Days::new(i as u64), price, price, price, price, 1_000.0)
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("IndicatorEngine");

    for size in [1_000_usize, 5_000, 20_000] {
        let series = Series::new(generate_bars(size)).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &series, |b, series| {
            b.iter(|| IndicatorEngine::new().compute(black_box(series)));
        });
    }

    group.finish();
}

fn bench_windowed(c: &mut Criterion) {
    let mut group = c.benchmark_group("Windowed");
    let bars = generate_bars(10_000);

    for period in [10_usize, 50, 200] {
        group.bench_with_input(BenchmarkId::new("SMA", period), &period, |b, &period| {
            b.iter(|| SMA::new(period).compute(black_box(&bars)));
        });
        group.bench_with_input(BenchmarkId::new("RSI", period), &period, |b, &period| {
            b.iter(|| RSI::new(period).compute(black_box(&bars)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engine, bench_windowed);
criterion_main!(benches);
