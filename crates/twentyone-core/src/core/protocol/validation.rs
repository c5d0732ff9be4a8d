use crate::core::units::{QuantityError, Time};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Stage name cannot be empty")]
    EmptyName,

    #[error("Stage '{stage}': {field} must be positive and finite, got {value}")]
    NonPhysical {
        stage: String,
        field: &'static str,
        value: String,
    },

    #[error("Protocol parameter '{field}' must be positive and finite, got {value}")]
    InvalidParameter { field: &'static str, value: String },

    #[error("Integrator step size must be positive and finite, got {0}")]
    InvalidStepSize(Time),

    #[error("Stage '{stage}' is too short for the integrator step size {step_size}")]
    ZeroSteps { stage: String, step_size: Time },

    #[error("Barostat frequency must be a positive number of steps, got {0}")]
    InvalidBarostatFrequency(i64),

    #[error("Duplicate stage name '{0}' in schedule")]
    DuplicateStageName(String),

    #[error(transparent)]
    Quantity(#[from] QuantityError),
}
