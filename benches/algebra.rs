//! Period algebra benchmarks
//!
//! Covers construction (rounding plus derived-state caching), the binary
//! relational operations, and the composed set operations.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench algebra
//!
//! # Specific groups
//! cargo bench --bench algebra -- "construction"
//! cargo bench --bench algebra -- "set_ops"
//! ```

use calspan::{Boundaries, Period, Precision};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// =============================================================================
// Helper Functions
// =============================================================================

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

fn day_period(offset: i64, len: i64) -> Period {
    let start = midnight(2021, 1, 1) + Duration::days(offset);
    Period::new(start, start + Duration::days(len)).unwrap()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let start = midnight(2021, 1, 1) + Duration::hours(13);
    let end = midnight(2021, 9, 15) + Duration::hours(7);

    group.bench_function("day_precision", |b| {
        b.iter(|| {
            Period::make(
                black_box(start),
                black_box(end),
                Precision::Day,
                Boundaries::ExcludeNone,
            )
            .unwrap()
        })
    });
    group.bench_function("from_text", |b| {
        b.iter(|| {
            Period::make(
                black_box("2021-01-01"),
                black_box("2021-09-15"),
                Precision::Day,
                Boundaries::ExcludeNone,
            )
            .unwrap()
        })
    });
    group.finish();
}

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    let a = day_period(0, 90);
    let b = day_period(60, 90);

    group.bench_function("overlaps_with", |bench| {
        bench.iter(|| black_box(&a).overlaps_with(black_box(&b)).unwrap())
    });
    group.bench_function("touches_with", |bench| {
        bench.iter(|| black_box(&a).touches_with(black_box(&b)).unwrap())
    });
    group.bench_function("contains", |bench| {
        let ts = midnight(2021, 2, 15);
        bench.iter(|| black_box(&a).contains(black_box(ts)))
    });
    group.finish();
}

fn bench_set_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_ops");
    let base = day_period(0, 365);
    let others: Vec<Period> = (0..8).map(|i| day_period(i * 40, 25)).collect();

    group.bench_function("overlap", |b| {
        b.iter(|| black_box(&base).overlap(black_box(&others[0])).unwrap())
    });
    group.bench_function("diff", |b| {
        b.iter(|| black_box(&base).diff(black_box(&others[0])).unwrap())
    });
    group.bench_function("subtract_8", |b| {
        b.iter(|| black_box(&base).subtract(black_box(&others)).unwrap())
    });
    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("length");
    let days = day_period(0, 365);
    let months = Period::make(
        midnight(2015, 1, 1),
        midnight(2021, 12, 1),
        Precision::Month,
        Boundaries::ExcludeNone,
    )
    .unwrap();

    // Day precision is arithmetic; month precision walks the iterator.
    group.bench_function("day_arithmetic", |b| b.iter(|| black_box(&days).length()));
    group.bench_function("month_iterated", |b| b.iter(|| black_box(&months).length()));
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_predicates,
    bench_set_ops,
    bench_length
);
criterion_main!(benches);
