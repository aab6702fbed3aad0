//! Error types for the CLI

use berrycalc::error::StateError;
use berrycalc::keypad::UnknownLabel;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// State file could not be read or written
    #[error("State file error: {0}")]
    State(#[from] StateError),

    /// A `press` label names no button
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabel),

    /// Terminal or log file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be installed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_unknown_label_message() {
        let err: CliError = UnknownLabel("^".to_string()).into();
        assert_eq!(err.to_string(), "Unknown button label: \"^\"");
    }

    #[test]
    fn test_state_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CliError = StateError::io(Path::new("calc.json"), io).into();
        assert!(err.to_string().starts_with("State file error:"));
        assert!(err.to_string().contains("calc.json"));
    }

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("already set");
        assert_eq!(err.to_string(), "Logging setup failed: already set");
    }
}
