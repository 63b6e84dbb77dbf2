use std::path::Path;

use payband_core::{ExError, ExErrorKind, PaybandError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Failures at the presentation boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("YAML parse error: {message}")]
    Yaml { message: String },

    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    #[error("JSON encode error: {message}")]
    Json { message: String },

    #[error(transparent)]
    Domain(#[from] PaybandError),
}

impl CliError {
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn invalid_roster(reason: impl Into<String>) -> Self {
        CliError::InvalidRoster {
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Yaml {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
        }
    }
}

impl From<CliError> for ExError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_message(format!("{}: {}", path, message)),
            CliError::Yaml { message } | CliError::Json { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            CliError::InvalidRoster { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
            CliError::Domain(err) => err.into(),
        }
    }
}
