//! Benchmarks for the analysis pipeline.

mod engine;
mod spectrum;

pub use engine::bench_engine;
pub use spectrum::bench_spectrum;
