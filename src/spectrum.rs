//! Frequency-domain side of the analysis.
//!
//! Plain forward DFTs of real waveforms, the matching bin-frequency axis and
//! the helpers needed to read or plot the result.

use rustfft::{num_complex::Complex64, Fft, FftPlanner};
use std::sync::Arc;

/// Planned forward DFT for one transform length.
///
/// Planning is the expensive part, so one `Spectrometer` is reused for every
/// waveform of the same length.
pub struct Spectrometer {
    /// FFT processor, absent for zero-length transforms
    fft: Option<Arc<dyn Fft<f64>>>,
    /// Scratch buffer reused across `process` calls
    scratch: Vec<Complex64>,
    len: usize,
}

impl Spectrometer {
    pub fn new(len: usize) -> Self {
        let fft = (len > 0).then(|| FftPlanner::<f64>::new().plan_fft_forward(len));
        let scratch_len = fft.as_ref().map_or(0, |f| f.get_inplace_scratch_len());
        Self {
            fft,
            scratch: vec![Complex64::new(0.0, 0.0); scratch_len],
            len,
        }
    }

    /// Transform length this spectrometer was planned for.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Unnormalized forward DFT: `S[j] = Σ x[k]·exp(-2πi·j·k/N)`.
    ///
    /// # Panics
    /// If `samples.len()` differs from the planned length.
    pub fn transform(&mut self, samples: &[f64]) -> Vec<Complex64> {
        assert_eq!(
            samples.len(),
            self.len,
            "spectrometer planned for {} samples",
            self.len
        );
        let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        if let Some(fft) = &self.fft {
            fft.process_with_scratch(&mut buffer, &mut self.scratch);
        }
        buffer
    }
}

/// One-shot forward DFT of a real sequence.
pub fn dft(samples: &[f64]) -> Vec<Complex64> {
    Spectrometer::new(samples.len()).transform(samples)
}

/// Bin frequencies (Hz) for a length-`len` DFT at `sample_rate`.
///
/// Standard FFT layout: bins `0..ceil(len/2)` hold `j·fs/len`, the rest hold
/// the negative frequencies `(j - len)·fs/len`.
pub fn fft_freqs(len: usize, sample_rate: f64) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    let resolution = 1.0 / (len as f64 * (1.0 / sample_rate));
    let positive = len.div_ceil(2);
    (0..len)
        .map(|j| {
            let bin = if j < positive {
                j as f64
            } else {
                j as f64 - len as f64
            };
            bin * resolution
        })
        .collect()
}

/// Magnitude of every coefficient.
pub fn magnitudes(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Reorder FFT-layout data so frequency increases monotonically.
pub fn fft_shift<T: Clone>(data: &[T]) -> Vec<T> {
    let mut shifted = data.to_vec();
    shifted.rotate_right(data.len() / 2);
    shifted
}

/// `(frequency, magnitude)` pairs ordered by frequency, ready for plotting.
pub fn magnitude_points(freqs: &[f64], spectrum: &[Complex64]) -> Vec<(f64, f64)> {
    let pairs: Vec<(f64, f64)> = freqs
        .iter()
        .zip(spectrum)
        .map(|(&f, c)| (f, c.norm()))
        .collect();
    fft_shift(&pairs)
}

/// Sum of squared samples.
pub fn energy(samples: &[f64]) -> f64 {
    samples.iter().map(|&x| x * x).sum()
}

/// Time-domain energy recovered from a spectrum: `Σ|S|² / N`.
pub fn spectral_energy(spectrum: &[Complex64]) -> f64 {
    if spectrum.is_empty() {
        return 0.0;
    }
    spectrum.iter().map(|c| c.norm_sqr()).sum::<f64>() / spectrum.len() as f64
}

/// A single strong bin of a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    /// Bin index in FFT layout
    pub bin: usize,
    /// Bin frequency (Hz)
    pub freq: f64,
    /// Coefficient magnitude
    pub magnitude: f64,
}

/// Bins below this fraction of the strongest bin are treated as leakage.
const PEAK_FLOOR: f64 = 1e-9;

/// Strongest non-negative-frequency bins, largest first.
///
/// Only the positive half is searched; for real input the negative half is a
/// mirror image.
pub fn dominant_bins(freqs: &[f64], spectrum: &[Complex64], count: usize) -> Vec<SpectralPeak> {
    let positive = spectrum.len().div_ceil(2);
    let mut peaks: Vec<SpectralPeak> = spectrum[..positive]
        .iter()
        .zip(freqs)
        .enumerate()
        .map(|(bin, (c, &freq))| SpectralPeak {
            bin,
            freq,
            magnitude: c.norm(),
        })
        .collect();

    let strongest = peaks.iter().map(|p| p.magnitude).fold(0.0, f64::max);
    peaks.retain(|p| p.magnitude > strongest * PEAK_FLOOR);
    peaks.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude).then(a.bin.cmp(&b.bin)));
    peaks.truncate(count);
    peaks
}
