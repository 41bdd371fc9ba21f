#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ModulationError, ModulationResult};
use crate::Complex64;

/// Largest `N` whose spectrum buffers can be allocated at all.
///
/// A `Vec` may not exceed `isize::MAX` bytes, and the widest per-sample
/// buffer holds `Complex64`.
pub const MAX_SAMPLE_COUNT: usize = isize::MAX as usize / std::mem::size_of::<Complex64>();

/// The five scalars that fully describe an AM analysis run.
///
/// Frequencies are in Hz, duration in seconds. Construction does not
/// validate; call [`ModulationParams::validate`] (the engine always does).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationParams {
    /// Carrier frequency `fc` (Hz)
    pub carrier_freq: f64,
    /// Information (message) frequency `fm` (Hz)
    pub info_freq: f64,
    /// Modulation index `m`
    pub modulation_index: f64,
    /// Duration `T` (seconds)
    pub duration: f64,
    /// Sampling rate `fs` (Hz)
    pub sample_rate: f64,
}

impl ModulationParams {
    pub fn new(
        carrier_freq: f64,
        info_freq: f64,
        modulation_index: f64,
        duration: f64,
        sample_rate: f64,
    ) -> Self {
        Self {
            carrier_freq,
            info_freq,
            modulation_index,
            duration,
            sample_rate,
        }
    }

    /// Check finiteness of every field and positivity of `T` and `fs`.
    ///
    /// Negative or zero frequencies and any finite modulation index are
    /// accepted: they produce degenerate but well-defined signals.
    pub fn validate(&self) -> ModulationResult<()> {
        let fields = [
            ("carrier_freq", self.carrier_freq),
            ("info_freq", self.info_freq),
            ("modulation_index", self.modulation_index),
            ("duration", self.duration),
            ("sample_rate", self.sample_rate),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(ModulationError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }

        if self.duration <= 0.0 {
            return Err(ModulationError::InvalidParameter {
                name: "duration",
                value: self.duration,
                reason: "must be greater than zero",
            });
        }
        if self.sample_rate <= 0.0 {
            return Err(ModulationError::InvalidParameter {
                name: "sample_rate",
                value: self.sample_rate,
                reason: "must be greater than zero",
            });
        }

        let product = self.duration * self.sample_rate;
        if !product.is_finite() {
            return Err(ModulationError::InvalidParameter {
                name: "duration",
                value: self.duration,
                reason: "duration * sample_rate overflows",
            });
        }
        if product >= MAX_SAMPLE_COUNT as f64 {
            return Err(ModulationError::InvalidParameter {
                name: "duration",
                value: self.duration,
                reason: "duration * sample_rate exceeds the largest sample count",
            });
        }

        Ok(())
    }

    /// Number of samples `N = floor(T * fs)`.
    ///
    /// Only meaningful for validated parameters.
    pub fn sample_count(&self) -> usize {
        (self.duration * self.sample_rate).floor() as usize
    }

    /// Half the sampling rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Whether either tone sits at or above Nyquist and will alias.
    pub fn is_aliased(&self) -> bool {
        let highest = self.carrier_freq.abs().max(self.info_freq.abs());
        self.sample_rate <= 2.0 * highest
    }
}

impl Default for ModulationParams {
    fn default() -> Self {
        Self::new(1000.0, 100.0, 0.5, 0.01, 8000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let params = ModulationParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.sample_count(), 80);
        assert!(!params.is_aliased());
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let params = ModulationParams::new(1000.0, 100.0, 0.5, 0.0, 8000.0);
        assert!(matches!(
            params.validate(),
            Err(ModulationError::InvalidParameter {
                name: "duration",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_positive_sample_rate() {
        let params = ModulationParams::new(1000.0, 100.0, 0.5, 1.0, -8000.0);
        assert!(matches!(
            params.validate(),
            Err(ModulationError::InvalidParameter {
                name: "sample_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let params = ModulationParams::new(f64::NAN, 100.0, 0.5, 1.0, 8000.0);
        assert!(params.validate().is_err());

        let params = ModulationParams::new(1000.0, 100.0, f64::INFINITY, 1.0, 8000.0);
        assert!(params.validate().is_err());

        let params = ModulationParams::new(1000.0, f64::NEG_INFINITY, 0.5, 1.0, 8000.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_overflowing_product() {
        let params = ModulationParams::new(1000.0, 100.0, 0.5, 1e200, 1e200);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_unrepresentable_sample_count() {
        // Finite product, but floor() as usize would saturate
        let params = ModulationParams::new(1000.0, 100.0, 0.5, 1e19, 10.0);
        assert!(matches!(
            params.validate(),
            Err(ModulationError::InvalidParameter {
                name: "duration",
                ..
            })
        ));

        // Fits in usize but not in a Vec<Complex64>
        let params = ModulationParams::new(1000.0, 100.0, 0.5, 1e18, 1.0);
        assert!(params.validate().is_err());

        let largest = ModulationParams::new(1000.0, 100.0, 0.5, 1e17, 1.0);
        assert!(largest.validate().is_ok());
        assert_eq!(largest.sample_count(), 100_000_000_000_000_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let params = ModulationParams::new(1200.0, 150.0, 0.75, 0.02, 9000.0);
        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"carrier_freq\":1200.0"));
        let back: ModulationParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    #[test]
    fn test_accepts_degenerate_values() {
        let params = ModulationParams::new(-5.0, 0.0, -3.0, 1.0, 0.5);
        assert!(params.validate().is_ok());
        assert_eq!(params.sample_count(), 0);
    }

    #[test]
    fn test_aliasing_detection() {
        let params = ModulationParams::new(5000.0, 100.0, 0.5, 0.01, 8000.0);
        assert!(params.is_aliased());
        assert_eq!(params.nyquist(), 4000.0);
    }
}
