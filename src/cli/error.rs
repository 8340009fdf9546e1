//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::topics::TopicError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Topic(#[from] TopicError),

    #[error("{0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install Ctrl-C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("{0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Invalid duration is a plain failure, not a usage error
            CliError::InvalidArgs(_) => crate::exitcode::FAILURE,
            CliError::Topic(_) => crate::exitcode::DATAERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::Signal(_) => crate::exitcode::SOFTWARE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_duration_exits_one() {
        let err = CliError::InvalidArgs("timer duration must be positive".to_string());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_library_errors_map_to_dataerr() {
        let err = CliError::from(TopicError::InvalidTernary {
            pos: 0,
            reason: "truncated".to_string(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }
}
