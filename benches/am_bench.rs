//! Benchmarks for the AM engine and its spectral helpers.
//!
//! Run with: cargo bench
//!
//! Sample counts cover the interactive range of the scope. Power-of-two and
//! prime lengths are both included since the FFT planner picks a different
//! algorithm for each.
//!
//! Benchmark groups:
//!   - engine/*     Full compute() runs
//!   - spectrum/*   DFT and frequency-axis helpers alone

use criterion::{criterion_group, criterion_main};

mod analysis;

/// Sample counts: powers of two plus a prime of similar size.
pub const SAMPLE_COUNTS: &[usize] = &[256, 1024, 4096, 4093];

criterion_group!(
    benches,
    analysis::bench_engine,
    analysis::bench_spectrum,
);
criterion_main!(benches);
