//! Criterion benchmarks for the greedy assigner.
//!
//! Uses a synthetic fleet where every operator shares one license and base,
//! so every trip scans the whole remaining pool.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_fleet::models::{Operator, Trip, Unit};
use u_fleet::scheduler::GreedyAssigner;

fn fleet(size: usize) -> (Vec<Operator>, HashMap<String, Unit>, Vec<Trip>) {
    let start = NaiveDate::from_ymd_opt(2026, 1, 13)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap();

    let operators = (0..size)
        .map(|i| {
            Operator::new(format!("OP{i}"), "B", "VER")
                .with_cost(100.0 + (i % 50) as f64)
                .with_unit_type("Torton")
        })
        .collect();
    let units = (0..size)
        .map(|i| {
            let unit = Unit::new(format!("U{i}"), "B", "VER").with_type("Torton");
            (unit.id.clone(), unit)
        })
        .collect();
    let trips = (0..size)
        .map(|i| {
            Trip::new(
                format!("V{i}"),
                format!("U{i}"),
                start + Duration::minutes((i * 7 % 600) as i64),
            )
            .with_priority((i % 5) as i32 + 1)
            .with_duration_hours((i % 8) as f64 + 1.0)
        })
        .collect();

    (operators, units, trips)
}

fn bench_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_assign");

    for size in [50usize, 200, 500] {
        let (operators, units, trips) = fleet(size);

        group.bench_with_input(BenchmarkId::new("basic", size), &size, |b, _| {
            let assigner = GreedyAssigner::basic();
            b.iter(|| black_box(assigner.assign(&operators, &units, &trips)));
        });

        group.bench_with_input(BenchmarkId::new("extended", size), &size, |b, _| {
            let assigner = GreedyAssigner::extended();
            b.iter(|| black_box(assigner.assign(&operators, &units, &trips)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assign);
criterion_main!(benches);
