//! Error types for simulation operations.

use hf_core::CoreError;
use thiserror::Error;

/// Errors encountered while resolving a scenario or stepping a run.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown conductor material: {name} (expected iron, copper, or wood)")]
    UnknownMaterial { name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Numeric error: {message}")]
    Numeric { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        SimError::Numeric {
            message: e.to_string(),
        }
    }
}
