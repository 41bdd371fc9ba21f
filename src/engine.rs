//! The signal engine: parameters in, waveforms and spectra out.
//!
//! ```
//! use am_scope::engine::SignalEngine;
//!
//! let analysis = SignalEngine::compute(1000.0, 100.0, 0.5, 0.01, 8000.0).unwrap();
//! assert_eq!(analysis.len(), 80);
//! ```

use rustfft::num_complex::Complex64;
use tracing::{debug, warn};

use crate::error::ModulationResult;
use crate::modulation::{signal, ModulationParams};
use crate::spectrum::{self, Spectrometer};

/// Everything one analysis run produces.
///
/// Every vector has the same length `N = floor(T·fs)`, and the spectra are
/// index-aligned with `freqs`.
#[derive(Debug, Clone, PartialEq)]
pub struct AmAnalysis {
    pub params: ModulationParams,
    /// Sample instants (s)
    pub t: Vec<f64>,
    pub carrier: Vec<f64>,
    pub info: Vec<f64>,
    pub modulated: Vec<f64>,
    /// DFT bin frequencies (Hz), FFT layout
    pub freqs: Vec<f64>,
    pub carrier_spectrum: Vec<Complex64>,
    pub info_spectrum: Vec<Complex64>,
    pub modulated_spectrum: Vec<Complex64>,
}

/// The eight outputs in call order: `(t, carrier, info, modulated, freqs, Sc, Si, Sm)`.
pub type AmParts = (
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<f64>,
    Vec<Complex64>,
    Vec<Complex64>,
    Vec<Complex64>,
);

impl AmAnalysis {
    /// Sample count `N`.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Unpack into the eight-tuple form.
    pub fn into_parts(self) -> AmParts {
        (
            self.t,
            self.carrier,
            self.info,
            self.modulated,
            self.freqs,
            self.carrier_spectrum,
            self.info_spectrum,
            self.modulated_spectrum,
        )
    }

    fn empty(params: ModulationParams) -> Self {
        Self {
            params,
            t: Vec::new(),
            carrier: Vec::new(),
            info: Vec::new(),
            modulated: Vec::new(),
            freqs: Vec::new(),
            carrier_spectrum: Vec::new(),
            info_spectrum: Vec::new(),
            modulated_spectrum: Vec::new(),
        }
    }
}

/// Stateless entry point mirroring the five-scalar contract.
pub struct SignalEngine;

impl SignalEngine {
    pub fn compute(
        carrier_freq: f64,
        info_freq: f64,
        modulation_index: f64,
        duration: f64,
        sample_rate: f64,
    ) -> ModulationResult<AmAnalysis> {
        compute(&ModulationParams::new(
            carrier_freq,
            info_freq,
            modulation_index,
            duration,
            sample_rate,
        ))
    }
}

/// Synthesize the carrier, message and AM signals and transform all three.
///
/// Fails only when `params` does not validate. `T·fs < 1` is not an error:
/// it yields an analysis with every vector empty.
pub fn compute(params: &ModulationParams) -> ModulationResult<AmAnalysis> {
    params.validate()?;

    let len = params.sample_count();
    debug!(
        fc = params.carrier_freq,
        fm = params.info_freq,
        m = params.modulation_index,
        samples = len,
        "computing AM analysis"
    );
    if params.is_aliased() {
        warn!(
            nyquist = params.nyquist(),
            "tone at or above Nyquist, spectrum will alias"
        );
    }
    if len == 0 {
        return Ok(AmAnalysis::empty(*params));
    }

    let t = signal::time_axis(params.duration, len);
    let carrier = signal::sine_wave(params.carrier_freq, &t);
    let info = signal::sine_wave(params.info_freq, &t);
    let modulated = signal::amplitude_modulate(&carrier, &info, params.modulation_index);

    let mut spectrometer = Spectrometer::new(len);
    let carrier_spectrum = spectrometer.transform(&carrier);
    let info_spectrum = spectrometer.transform(&info);
    let modulated_spectrum = spectrometer.transform(&modulated);
    let freqs = spectrum::fft_freqs(len, params.sample_rate);

    Ok(AmAnalysis {
        params: *params,
        t,
        carrier,
        info,
        modulated,
        freqs,
        carrier_spectrum,
        info_spectrum,
        modulated_spectrum,
    })
}
