//! Amplitude modulation synthesis and spectral analysis.
//!
//! Five scalars in (carrier frequency, message frequency, modulation index,
//! duration, sample rate), eight arrays out: the time axis, the carrier,
//! message and modulated waveforms, the DFT bin frequencies and the three
//! spectra. See [`engine::compute`].

pub mod engine;
pub mod error;
pub mod form; // Textual parameter parsing
pub mod modulation;
pub mod spectrum;
pub mod stats;

pub use engine::{AmAnalysis, SignalEngine};
pub use error::{FormError, ModulationError};
pub use modulation::ModulationParams;
pub use rustfft::num_complex::Complex64;
