use std::path::PathBuf;

use thiserror::Error;

/// Generator-level error type.
/// Every variant is fatal: the run aborts before any output is written.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Cannot read input file '{}': {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{}' is not valid JSON: {source}", path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input record: missing required field '{0}'")]
    MissingField(String),

    #[error("Invalid input record: {0}")]
    InvalidRecord(String),

    #[error("Cannot write output '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Short machine-readable code, used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            GenError::InputRead { .. } => "INPUT_READ",
            GenError::InputParse { .. } => "INPUT_PARSE",
            GenError::MissingField(_) => "MISSING_FIELD",
            GenError::InvalidRecord(_) => "INVALID_RECORD",
            GenError::Write { .. } => "WRITE_ERROR",
        }
    }
}
