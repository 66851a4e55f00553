//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error, including terminal setup and teardown
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be set up
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// History could not be serialized
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Some `eval` expressions produced `Error`
    #[error("{failed} of {total} expression(s) failed")]
    Evaluation {
        /// Expressions that failed
        failed: usize,
        /// Expressions evaluated
        total: usize,
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

    /// Create an evaluation failure summary
    #[must_use]
    pub const fn evaluation(failed: usize, total: usize) -> Self {
        Self::Evaluation { failed, total }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("subscriber already set");
        assert!(err.to_string().contains("Logging setup failed"));
        assert!(err.to_string().contains("subscriber already set"));
    }

    #[test]
    fn test_evaluation_error() {
        let err = CliError::evaluation(1, 3);
        assert_eq!(err.to_string(), "1 of 3 expression(s) failed");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no tty");
        let err: CliError = io_err.into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("no tty"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: CliError = json_err.into();
        assert!(err.to_string().starts_with("JSON output failed"));
    }
}
