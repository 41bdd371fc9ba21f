//! Benchmarks for the spectral helpers.

use std::hint::black_box;

use am_scope::spectrum::{dominant_bins, fft_freqs, Spectrometer};
use criterion::{BenchmarkId, Criterion};

use crate::SAMPLE_COUNTS;

pub fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("spectrum");

    for &size in SAMPLE_COUNTS {
        let samples: Vec<f64> = (0..size)
            .map(|k| (std::f64::consts::TAU * 50.0 * k as f64 / size as f64).sin())
            .collect();

        // Planned once, transform only
        let mut spectrometer = Spectrometer::new(size);
        group.bench_with_input(BenchmarkId::new("transform", size), &size, |b, _| {
            b.iter(|| spectrometer.transform(black_box(&samples)))
        });

        group.bench_with_input(BenchmarkId::new("fft_freqs", size), &size, |b, &size| {
            b.iter(|| fft_freqs(black_box(size), black_box(48_000.0)))
        });

        let freqs = fft_freqs(size, 48_000.0);
        let spectrum = spectrometer.transform(&samples);
        group.bench_with_input(BenchmarkId::new("dominant_bins", size), &size, |b, _| {
            b.iter(|| dominant_bins(black_box(&freqs), black_box(&spectrum), 3))
        });
    }

    group.finish();
}
