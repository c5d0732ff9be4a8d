use crate::core::protocol::ValidationError;
use thiserror::Error;

/// Errors raised while running the protocol.
///
/// `E` is the error type of the simulation engine. Engine failures are kept as the exact
/// value the engine returned, alongside the stage that was executing.
#[derive(Debug, Error)]
pub enum ProtocolError<E> {
    #[error("Invalid protocol input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Schedule is empty; schedule generation produced no stages")]
    EmptySchedule,

    #[error("Protocol has already {state}; build a new scheduler to run it again")]
    AlreadyFinished { state: &'static str },

    #[error("Stage '{stage}' (#{}) rejected its inputs: {source}", .index + 1)]
    StageValidation {
        index: usize,
        stage: String,
        #[source]
        source: ValidationError,
    },

    #[error("Simulation engine failed during stage '{stage}' (#{}): {source}", .index + 1)]
    Engine {
        index: usize,
        stage: String,
        #[source]
        source: E,
    },
}

impl<E> ProtocolError<E> {
    /// Zero-based index and name of the stage that failed, if the failure happened inside a
    /// stage.
    pub fn failed_stage(&self) -> Option<(usize, &str)> {
        match self {
            ProtocolError::StageValidation { index, stage, .. }
            | ProtocolError::Engine { index, stage, .. } => Some((*index, stage.as_str())),
            _ => None,
        }
    }

    pub fn engine_error(&self) -> Option<&E> {
        match self {
            ProtocolError::Engine { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn into_engine_error(self) -> Option<E> {
        match self {
            ProtocolError::Engine { source, .. } => Some(source),
            _ => None,
        }
    }
}
