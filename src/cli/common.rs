//! Shared CLI error and exit code handling.

use std::fmt;

/// Process exit codes used by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was read but failed validation
    ValidationError = 1,
    /// Input could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI handler.
#[derive(Debug)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub code: ExitCode,
}

impl CliError {
    /// Input could not be read, parsed or written.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::IoError,
        }
    }

    /// Input was read but is not valid.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: ExitCode::ValidationError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI handlers.
pub type CliResult<T> = Result<T, CliError>;
