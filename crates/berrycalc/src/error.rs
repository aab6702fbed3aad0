//! Error types for arithmetic and persistence
//!
//! Arithmetic errors never leave the engine: they are collapsed into the
//! error latch. Persistence errors propagate to the host.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - every variant collapses into the same `Error` display
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Display text is not a number
    #[error("Cannot parse {0:?} as a number")]
    Parse(String),

    /// Division by exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Input outside a function's domain
    #[error("{function} is undefined for {value}")]
    Domain {
        /// Function name as shown on the keypad
        function: &'static str,
        /// Offending input
        value: f64,
    },

    /// Result overflowed to infinity or NaN
    #[error("Result is not finite: {0}")]
    NonFinite(f64),
}

/// Errors raised while loading or saving calculator state
#[derive(Debug, Error)]
pub enum StateError {
    /// Payload is not valid JSON for the state schema
    #[error("Invalid state payload: {0}")]
    Json(#[from] serde_json::Error),

    /// State file could not be read or written
    #[error("State file {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StateError {
    /// Create an I/O error for a specific file
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_parse() {
        let err = CalcError::Parse("Error".into());
        assert_eq!(err.to_string(), "Cannot parse \"Error\" as a number");
    }

    #[test]
    fn test_calc_error_display_domain() {
        let err = CalcError::Domain {
            function: "log",
            value: -5.0,
        };
        assert_eq!(err.to_string(), "log is undefined for -5");
    }

    #[test]
    fn test_calc_error_display_non_finite() {
        let err = CalcError::NonFinite(f64::INFINITY);
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn test_state_error_io_keeps_path() {
        let err = StateError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_state_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: StateError = json_err.into();
        assert!(matches!(err, StateError::Json(_)));
    }
}
