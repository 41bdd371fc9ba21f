//! Editable parameter state for the scope

use am_scope::{form, ModulationParams};

/// One of the five editable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    CarrierFreq,
    InfoFreq,
    ModulationIndex,
    Duration,
    SampleRate,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::CarrierFreq,
        Field::InfoFreq,
        Field::ModulationIndex,
        Field::Duration,
        Field::SampleRate,
    ];

    /// Form field name, as accepted by [`form::parse_field`].
    pub fn form_name(self) -> &'static str {
        match self {
            Field::CarrierFreq => form::CARRIER_FREQ,
            Field::InfoFreq => form::SIGNAL_FREQ,
            Field::ModulationIndex => form::MODULATION_INDEX,
            Field::Duration => form::DURATION,
            Field::SampleRate => form::SAMPLING_RATE,
        }
    }

    /// Short label for the parameter bar.
    pub fn label(self) -> &'static str {
        match self {
            Field::CarrierFreq => "fc",
            Field::InfoFreq => "fm",
            Field::ModulationIndex => "m",
            Field::Duration => "T",
            Field::SampleRate => "fs",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::CarrierFreq | Field::InfoFreq | Field::SampleRate => "Hz",
            Field::ModulationIndex => "",
            Field::Duration => "s",
        }
    }

    pub fn get(self, params: &ModulationParams) -> f64 {
        match self {
            Field::CarrierFreq => params.carrier_freq,
            Field::InfoFreq => params.info_freq,
            Field::ModulationIndex => params.modulation_index,
            Field::Duration => params.duration,
            Field::SampleRate => params.sample_rate,
        }
    }

    /// Copy of `params` with this field replaced.
    pub fn with(self, params: &ModulationParams, value: f64) -> ModulationParams {
        let mut out = *params;
        match self {
            Field::CarrierFreq => out.carrier_freq = value,
            Field::InfoFreq => out.info_freq = value,
            Field::ModulationIndex => out.modulation_index = value,
            Field::Duration => out.duration = value,
            Field::SampleRate => out.sample_rate = value,
        }
        out
    }

    /// Step the value up or down.
    ///
    /// The index moves linearly in tenths; everything else scales by 10% so
    /// the step stays proportionate across decades.
    pub fn nudge(self, value: f64, up: bool) -> f64 {
        match self {
            Field::ModulationIndex => {
                let stepped = if up { value + 0.1 } else { value - 0.1 };
                (stepped * 10.0).round() / 10.0
            }
            // Scaling cannot leave zero, so step by one unit there
            _ if value == 0.0 => {
                if up {
                    1.0
                } else {
                    -1.0
                }
            }
            _ => {
                if up {
                    value * 1.1
                } else {
                    value / 1.1
                }
            }
        }
    }

    pub fn next(self) -> Field {
        let i = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Field {
        let i = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Input mode of the scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Arrow keys move between and nudge parameters
    Browse,
    /// Typing a new value for the selected parameter
    Edit(String),
}

/// Last message shown in the status line.
#[derive(Clone, Debug, Default)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}
