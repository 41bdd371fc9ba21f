//! Sampled sinusoids and the AM envelope.

/*
Amplitude Modulation
====================

AM encodes a message by varying the amplitude of a fast sinusoid. The slow
message signal rides on top of the carrier as its envelope.

Vocabulary
----------

  carrier       The high-frequency sinusoid being modulated:
                  c(t) = sin(2π·fc·t)

  information   The message, here a single low-frequency tone:
                  i(t) = sin(2π·fm·t)

  index (m)     How strongly the message moves the envelope.
                  m = 0     → pure carrier
                  0 < m < 1 → envelope stays positive (classic AM)
                  m = 1     → envelope touches zero at message troughs
                  m > 1     → over-modulation, envelope inverts


The Math
--------

Double-sideband AM with carrier:

    s(t) = (1 + m·i(t)) · c(t)

Expanding with a product-to-sum identity shows where the energy goes:

    s(t) = sin(2π·fc·t)
         + (m/2)·cos(2π·(fc - fm)·t)
         - (m/2)·cos(2π·(fc + fm)·t)

So the spectrum holds the carrier plus two sidebands at fc ± fm, each with
m/2 of the carrier's amplitude.


Sampling
--------

Continuous time is replaced by N = floor(T·fs) samples on the half-open grid

    t[k] = k · (T / N),   k = 0 .. N-1

The endpoint T is never sampled, so a whole number of periods tiles the
window exactly and lands on a single DFT bin.

For the spectrum to be faithful fs must exceed 2·max(fc, fm). Nothing here
enforces that; an aliased tone is still a well-defined signal.
*/

use std::f64::consts::TAU;

/// Uniform half-open time grid covering `[0, duration)` with `len` samples.
pub fn time_axis(duration: f64, len: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    let step = duration / len as f64;
    (0..len).map(|k| k as f64 * step).collect()
}

/// Sample `sin(2π·freq·t)` at every point of `times`.
pub fn sine_wave(freq: f64, times: &[f64]) -> Vec<f64> {
    times.iter().map(|&t| (TAU * freq * t).sin()).collect()
}

/// Envelope gain for a single message sample: `1 + m·info`.
#[inline]
pub fn envelope(modulation_index: f64, info: f64) -> f64 {
    1.0 + modulation_index * info
}

/// Apply the AM envelope sample-by-sample.
///
/// `carrier` and `info` must be index-aligned; the output has the length of
/// the shorter one.
pub fn amplitude_modulate(carrier: &[f64], info: &[f64], modulation_index: f64) -> Vec<f64> {
    carrier
        .iter()
        .zip(info)
        .map(|(&c, &i)| envelope(modulation_index, i) * c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_axis_half_open() {
        let t = time_axis(1.0, 4);
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_time_axis_empty() {
        assert!(time_axis(1.0, 0).is_empty());
    }

    #[test]
    fn test_sine_quarter_period() {
        // 1 Hz sampled at quarter periods: 0, 1, 0, -1
        let t = time_axis(1.0, 4);
        let s = sine_wave(1.0, &t);
        assert_eq!(s[0], 0.0);
        assert!((s[1] - 1.0).abs() < 1e-12);
        assert!(s[2].abs() < 1e-12);
        assert!((s[3] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_envelope_center() {
        // Silent message leaves the carrier untouched
        assert_eq!(envelope(0.5, 0.0), 1.0);
    }

    #[test]
    fn test_envelope_full_modulation() {
        assert_eq!(envelope(1.0, 1.0), 2.0);
        assert_eq!(envelope(1.0, -1.0), 0.0);
    }

    #[test]
    fn test_envelope_over_modulation_inverts() {
        assert!(envelope(2.0, -1.0) < 0.0);
    }

    #[test]
    fn test_amplitude_modulate_scales_carrier() {
        let carrier = [1.0, -1.0, 0.5];
        let info = [1.0, 0.0, -1.0];
        let out = amplitude_modulate(&carrier, &info, 0.5);
        assert_eq!(out, vec![1.5, -1.0, 0.25]);
    }
}
