//! Benchmarks for full AM analysis runs.

use std::hint::black_box;

use am_scope::{engine::compute, ModulationParams};
use criterion::{BenchmarkId, Criterion};

use crate::SAMPLE_COUNTS;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    let sample_rate = 48_000.0;

    for &size in SAMPLE_COUNTS {
        // Duration chosen so floor(T·fs) lands on `size`
        let duration = (size as f64 + 0.5) / sample_rate;
        let params = ModulationParams::new(1000.0, 100.0, 0.5, duration, sample_rate);

        group.bench_with_input(BenchmarkId::new("compute", size), &params, |b, params| {
            b.iter(|| compute(black_box(params)).unwrap())
        });
    }

    group.finish();
}
