//! Time-domain side of the analysis: parameters and sampled waveforms.

/// Validated input scalars.
pub mod params;
/// Time grid, sine sampler and AM envelope.
pub mod signal;

pub use params::ModulationParams;
