//! Benchmarks for the filter pipeline
//!
//! Run with: cargo bench --package pipeline
//!
//! Filters a synthetic fleet of servers with and without name patterns.

use chrono::{TimeDelta, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use model::{Candidate, FilterConfig};
use pipeline::{FilterPipeline, RunContext};

fn fleet(context: &RunContext, size: usize) -> Vec<Candidate> {
    (0..size)
        .map(|i| {
            let prefix = match i % 3 {
                0 => "web",
                1 => "db",
                _ => "tmp",
            };
            Candidate::new(
                format!("id-{}", i),
                format!("{}-{:05}", prefix, i),
                context.now - TimeDelta::hours(i as i64),
            )
        })
        .collect()
}

fn bench_age_only(c: &mut Criterion) {
    let context = RunContext::capture();
    let candidates = fleet(&context, 10_000);
    let pipeline = FilterPipeline::from_config(&FilterConfig::new().with_age("30d"))
        .expect("valid config");

    c.bench_function("age_only_10k", |b| {
        b.iter(|| {
            let survivors = pipeline.apply(black_box(candidates.clone()), &context).unwrap();
            black_box(survivors)
        })
    });
}

fn bench_age_and_names(c: &mut Criterion) {
    let context = RunContext::capture();
    let candidates = fleet(&context, 10_000);
    let config = FilterConfig::new()
        .with_age("30d")
        .with_name_pattern("(web|db)-\\d+")
        .with_skip_name_pattern("db-0.*");
    let pipeline = FilterPipeline::from_config(&config).expect("valid config");

    c.bench_function("age_and_names_10k", |b| {
        b.iter(|| {
            let survivors = pipeline.apply(black_box(candidates.clone()), &context).unwrap();
            black_box(survivors)
        })
    });
}

criterion_group!(benches, bench_age_only, bench_age_and_names);
criterion_main!(benches);
