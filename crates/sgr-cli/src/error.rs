//! Error types for sgr-cli.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Target user has no ratings in the dataset
    #[error("Target user '{user_id}' not found in dataset. Available users: {available}")]
    UnknownUser { user_id: String, available: String },

    /// Refusing to overwrite an existing file
    #[error("File already exists: {0} (use --force to overwrite)")]
    FileExists(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Library error
    #[error("{0}")]
    Sugerir(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::UnknownUser { .. } => ExitCode::from(2),
            Self::FileExists(_) => ExitCode::from(3),
            Self::Io(_) => ExitCode::from(7),
            Self::Sugerir(_) => ExitCode::from(1),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Sugerir(e.to_string())
    }
}

impl From<sugerir::SugerirError> for CliError {
    fn from(e: sugerir::SugerirError) -> Self {
        match e {
            sugerir::SugerirError::Io(io) => Self::Io(io),
            other => Self::Sugerir(other.to_string()),
        }
    }
}
