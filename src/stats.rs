//! Summary statistics for sampled waveforms and their spectra.

use rustfft::num_complex::Complex64;

/// Level statistics of one waveform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalStats {
    pub peak: f64,
    pub rms: f64,
    pub dc: f64,
}

impl SignalStats {
    /// Compute stats from a buffer; an empty buffer yields all zeros.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let len = samples.len() as f64;
        let peak = samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
        let rms = (samples.iter().map(|&x| x * x).sum::<f64>() / len).sqrt();
        let dc = samples.iter().sum::<f64>() / len;
        Self { peak, rms, dc }
    }
}

/// Index of the bin whose frequency is closest to `target`.
pub fn nearest_bin(freqs: &[f64], target: f64) -> Option<usize> {
    freqs
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        .map(|(i, _)| i)
}

/// Estimate the modulation index from a modulated spectrum.
///
/// Each sideband at `fc ± fm` carries `m/2` of the carrier's amplitude, so
/// `m ≈ (|S(fc-fm)| + |S(fc+fm)|) / |S(fc)|`. Exact when all three tones
/// land on bins; leakage biases it otherwise. Returns `None` when the carrier
/// bin is empty or the message tone shares the carrier bin.
pub fn modulation_depth(
    freqs: &[f64],
    spectrum: &[Complex64],
    carrier_freq: f64,
    info_freq: f64,
) -> Option<f64> {
    let carrier_freq = carrier_freq.abs();
    let info_freq = info_freq.abs();
    let carrier = nearest_bin(freqs, carrier_freq)?;
    let upper = nearest_bin(freqs, carrier_freq + info_freq)?;
    let lower = nearest_bin(freqs, (carrier_freq - info_freq).abs())?;
    if upper == carrier || lower == carrier {
        return None;
    }

    let carrier_mag = spectrum.get(carrier)?.norm();
    if carrier_mag <= f64::EPSILON {
        return None;
    }
    let sidebands = spectrum.get(upper)?.norm() + spectrum.get(lower)?.norm();
    Some(sidebands / carrier_mag)
}
