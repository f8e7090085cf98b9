//! Benchmarks for the cycle-driven scheduling engine.
//!
//! Benchmarks cover:
//! - Workload-size scaling on a fixed balanced pool
//! - Core-mix comparisons over a fixed day-scale workload
//! - Construction and routing of large workloads
//! - Bounded runs and the remaining-cycle estimator

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use coremix::config::SimConfig;
use coremix::core::{BoundedScheduler, Scheduler};
use coremix::workload::{presets, TaskSpec};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Workload Generators
// ============================================================================

/// Deterministic ramp of difficulties 1 through 5.
fn massive_workload(size: u64) -> Vec<TaskSpec> {
    (0..size)
        .map(|i| TaskSpec::new(format!("Task{i}"), (i % 5) as f64 + 1.0))
        .collect()
}

/// Seeded mix across the full difficulty range the AI profiles use.
fn seeded_ai_workload(size: usize) -> Vec<TaskSpec> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|i| TaskSpec::new(format!("Job{i}"), rng.random_range(1.0..=15.0)))
        .collect()
}

// ============================================================================
// Workload Scaling Benchmarks
// ============================================================================

fn bench_workload_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("workload_scaling");

    for size in [10_u64, 50, 100, 500] {
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let tasks = massive_workload(size);
            let config = SimConfig::default().with_fast_units(4).with_eff_units(4);
            b.iter(|| {
                let mut sched = Scheduler::new(tasks.clone(), config.clone()).unwrap();
                black_box(sched.run_to_completion().unwrap())
            });
        });
    }
    group.finish();
}

// ============================================================================
// Core-Mix Benchmarks
// ============================================================================

fn bench_core_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("core_mix");

    for (label, fast_units, eff_units) in [("4f+0e", 4, 0), ("2f+2e", 2, 2), ("0f+4e", 0, 4)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &(fast_units, eff_units),
            |b, &(fast_units, eff_units)| {
                let tasks = presets::edtech_day();
                let config = SimConfig::default()
                    .with_fast_units(fast_units)
                    .with_eff_units(eff_units)
                    .with_threshold(7.0);
                b.iter(|| {
                    let mut sched = Scheduler::new(tasks.clone(), config.clone()).unwrap();
                    black_box(sched.run_to_completion().unwrap())
                });
            },
        );
    }
    group.finish();
}

// ============================================================================
// Construction and Routing Benchmarks
// ============================================================================

fn bench_construction_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction_routing");

    for size in [100_usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let tasks = seeded_ai_workload(size);
            let config = SimConfig::default().with_threshold(7.0);
            b.iter(|| black_box(Scheduler::new(tasks.clone(), config.clone()).unwrap()));
        });
    }
    group.finish();
}

// ============================================================================
// Bounded-Run Benchmarks
// ============================================================================

fn bench_bounded_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_runs");

    group.bench_function("run_for_max_cycles_50", |b| {
        let tasks = seeded_ai_workload(200);
        let config = SimConfig::default().with_threshold(7.0);
        b.iter(|| {
            let mut sched = BoundedScheduler::new(tasks.clone(), config.clone()).unwrap();
            black_box(sched.run_for_max_cycles(50).unwrap())
        });
    });

    group.bench_function("estimate_remaining_cycles", |b| {
        let mut sched = BoundedScheduler::new(
            seeded_ai_workload(200),
            SimConfig::default().with_threshold(7.0),
        )
        .unwrap();
        sched.run_for_max_cycles(50).unwrap();
        b.iter(|| black_box(sched.estimate_remaining_cycles()));
    });
    group.finish();
}

// ============================================================================
// Benchmark Groups
// ============================================================================

criterion_group!(scaling_benches, bench_workload_scaling);

criterion_group!(mix_benches, bench_core_mix);

criterion_group!(engine_benches, bench_construction_routing, bench_bounded_runs);

criterion_main!(scaling_benches, mix_benches, engine_benches);
