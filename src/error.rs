//! Error types for modulation analysis.

use thiserror::Error;

/// Errors raised by the signal engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModulationError {
    /// A parameter is non-finite or outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Result type for engine operations.
pub type ModulationResult<T> = Result<T, ModulationError>;

/// Errors raised while turning textual form fields into parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A required field was not supplied.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field value could not be parsed as a number.
    #[error("field `{field}` is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    /// The requested sample count exceeds the caller's limit.
    #[error("requested {requested} samples, limit is {limit}")]
    TooManySamples { requested: usize, limit: usize },

    /// The parsed parameters were rejected by the engine.
    #[error(transparent)]
    Modulation(#[from] ModulationError),
}

/// Result type for form parsing.
pub type FormResult<T> = Result<T, FormError>;
