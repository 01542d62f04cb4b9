use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exercise_tracker::models::Exercise;
use exercise_tracker::services::LogQuery;

fn synthetic_log(entries: usize) -> Vec<Exercise> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
    (0..entries)
        .map(|i| Exercise {
            description: format!("exercise {}", i),
            duration: 30,
            date: start + chrono::Days::new((i % 1500) as u64),
        })
        .collect()
}

fn benchmark_log_filtering(c: &mut Criterion) {
    let log = synthetic_log(10_000);

    let window = LogQuery::from_params(Some("2021-01-01"), Some("2022-01-01"), None);
    let window_with_limit = LogQuery::from_params(Some("2021-01-01"), Some("2022-01-01"), Some("50"));
    let unbounded = LogQuery::default();

    let mut group = c.benchmark_group("log_filtering");

    group.bench_function("date_window_10k", |b| {
        b.iter(|| window.apply(black_box(&log)))
    });

    group.bench_function("date_window_with_limit_10k", |b| {
        b.iter(|| window_with_limit.apply(black_box(&log)))
    });

    group.bench_function("unfiltered_10k", |b| {
        b.iter(|| unbounded.apply(black_box(&log)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_log_filtering);
criterion_main!(benches);
