//! Benchmarks for the nonlin-math solvers.
//!
//! Run with: cargo bench -p nonlin-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use nonlin_math::prelude::*;

// =============================================================================
// SOLVERS
// =============================================================================

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");
    let config = SolverConfig::default();

    for kind in TestFunctionKind::ALL {
        let tf = TestFunction::get(kind);
        let (a, b) = tf.interval;
        let x0 = 0.5 * (a + b);
        let phi = tf.phi.expect("catalog presets have a fixed-point form");
        let df = tf.df.expect("catalog presets have a derivative");

        group.bench_with_input(BenchmarkId::new("bisection", kind), &tf, |bench, tf| {
            bench.iter(|| bisection(tf.f, black_box(a), black_box(b), 1e-10));
        });

        group.bench_with_input(BenchmarkId::new("fixed_point", kind), &tf, |bench, _| {
            bench.iter(|| fixed_point(phi, black_box(x0), &config));
        });

        group.bench_with_input(BenchmarkId::new("newton_raphson", kind), &tf, |bench, tf| {
            bench.iter(|| newton_raphson(tf.f, df, black_box(x0), &config));
        });
    }

    group.finish();
}

// =============================================================================
// ANALYSIS
// =============================================================================

fn bench_analysis(c: &mut Criterion) {
    let sequence: Vec<f64> = (0..100).map(|k| 1.0 + 0.5f64.powi(k)).collect();

    c.bench_function("analyze_100", |bench| {
        bench.iter(|| analyze(black_box(&sequence), Some(1.0)));
    });

    c.bench_function("estimate_order_100", |bench| {
        bench.iter(|| estimate_order(black_box(&sequence)));
    });
}

criterion_group!(benches, bench_solvers, bench_analysis);
criterion_main!(benches);
