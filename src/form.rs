//! Textual front door to the engine.
//!
//! Callers that receive parameters as strings (a command line, an edit box, a
//! submitted form) go through [`ModulationForm`]: every field must parse as a
//! number before the engine is touched, and the sample count can be capped.

use crate::engine::{self, AmAnalysis};
use crate::error::{FormError, FormResult};
use crate::modulation::ModulationParams;

pub const CARRIER_FREQ: &str = "carrier_freq";
pub const SIGNAL_FREQ: &str = "signal_freq";
pub const MODULATION_INDEX: &str = "modulation_index";
pub const DURATION: &str = "duration";
pub const SAMPLING_RATE: &str = "sampling_rate";

/// Field names in parameter order.
pub const FIELDS: [&str; 5] = [
    CARRIER_FREQ,
    SIGNAL_FREQ,
    MODULATION_INDEX,
    DURATION,
    SAMPLING_RATE,
];

/// Default cap on `floor(T·fs)`.
pub const DEFAULT_MAX_SAMPLES: usize = 1 << 20;

/// Parse one field value as a float, ignoring surrounding whitespace.
pub fn parse_field(field: &'static str, raw: &str) -> FormResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FormError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

/// Parses named fields into [`ModulationParams`] and submits them.
#[derive(Debug, Clone, Copy)]
pub struct ModulationForm {
    max_samples: Option<usize>,
}

impl ModulationForm {
    /// Form with the default sample cap.
    pub fn new() -> Self {
        Self {
            max_samples: Some(DEFAULT_MAX_SAMPLES),
        }
    }

    /// Set the sample cap; `None` removes it.
    pub fn max_samples(mut self, limit: Option<usize>) -> Self {
        self.max_samples = limit;
        self
    }

    /// Parse the five fields from `(name, value)` pairs.
    ///
    /// Unknown names are ignored; a repeated name keeps its last value.
    pub fn parse<'a, I>(&self, fields: I) -> FormResult<ModulationParams>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut raw: [Option<&str>; 5] = [None; 5];
        for (name, value) in fields {
            if let Some(slot) = FIELDS.iter().position(|&f| f == name) {
                raw[slot] = Some(value);
            }
        }

        let mut values = [0.0f64; 5];
        for (slot, &field) in FIELDS.iter().enumerate() {
            let text = raw[slot].ok_or(FormError::MissingField(field))?;
            values[slot] = parse_field(field, text)?;
        }

        let [fc, fm, m, duration, sample_rate] = values;
        Ok(ModulationParams::new(fc, fm, m, duration, sample_rate))
    }

    /// Validate parsed parameters and enforce the sample cap.
    pub fn check(&self, params: &ModulationParams) -> FormResult<()> {
        params.validate()?;
        if let Some(limit) = self.max_samples {
            let requested = params.sample_count();
            if requested > limit {
                return Err(FormError::TooManySamples { requested, limit });
            }
        }
        Ok(())
    }

    /// Check `params` and run the engine.
    pub fn run(&self, params: &ModulationParams) -> FormResult<AmAnalysis> {
        self.check(params)?;
        Ok(engine::compute(params)?)
    }

    /// Parse, check and run in one step.
    pub fn submit<'a, I>(&self, fields: I) -> FormResult<AmAnalysis>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let params = self.parse(fields)?;
        self.run(&params)
    }
}

impl Default for ModulationForm {
    fn default() -> Self {
        Self::new()
    }
}
