//! Error types for the aq-cli front end.

use std::path::PathBuf;

/// CLI error type wrapping chemistry, parsing, and I/O failures behind one
/// interface for the command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Chemistry error: {0}")]
    Chem(#[from] aq_chem::ChemError),

    #[error("Invalid substance spec '{spec}': {reason}")]
    BadSpec { spec: String, reason: String },

    #[error("Failed to read mixture file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse mixture file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
