use crate::utils::parser::ParseError;
use std::path::PathBuf;
use thiserror::Error;
use twentyonestep::core::protocol::ValidationError;
use twentyonestep::core::units::QuantityError;
use twentyonestep::engine::error::ProtocolError;
use twentyonestep::engine::rehearsal::RehearsalError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError<RehearsalError>),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid value for '{key}': {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: QuantityError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
