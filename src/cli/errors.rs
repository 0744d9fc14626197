//! CLI-specific error types
//!
//! Errors raised by a subsystem keep that subsystem's code in the
//! response; the CLI code only classifies them.

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::index::IndexError;
use crate::predicate::PredicateError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Malformed request
    RequestError,
    /// Index description rejected
    IndexError,
    /// Compilation failed
    CompileError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "KEYRANGE_CLI_CONFIG_ERROR",
            Self::IoError => "KEYRANGE_CLI_IO_ERROR",
            Self::RequestError => "KEYRANGE_CLI_REQUEST_ERROR",
            Self::IndexError => "KEYRANGE_CLI_INDEX_ERROR",
            Self::CompileError => "KEYRANGE_CLI_COMPILE_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    code_str: &'static str,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            code_str: code.code(),
            message: message.into(),
        }
    }

    /// Error carrying a subsystem's own code
    fn from_subsystem(code: CliErrorCode, code_str: &'static str, message: String) -> Self {
        Self {
            code,
            code_str,
            message,
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Malformed request
    pub fn request_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RequestError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string reported to the caller
    pub fn code_str(&self) -> &'static str {
        self.code_str
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code_str, self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Self::io_error(e.to_string())
        } else {
            Self::request_error(format!("JSON error: {}", e))
        }
    }
}

impl From<base64::DecodeError> for CliError {
    fn from(e: base64::DecodeError) -> Self {
        Self::request_error(format!("invalid base64 key: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::from_subsystem(CliErrorCode::ConfigError, e.code(), e.to_string())
    }
}

impl From<IndexError> for CliError {
    fn from(e: IndexError) -> Self {
        Self::from_subsystem(CliErrorCode::IndexError, e.code(), e.to_string())
    }
}

impl From<PredicateError> for CliError {
    fn from(e: PredicateError) -> Self {
        Self::from_subsystem(CliErrorCode::CompileError, e.code(), e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_codes() {
        let err = CliError::request_error("missing start");
        assert_eq!(err.code(), CliErrorCode::RequestError);
        assert_eq!(err.code_str(), "KEYRANGE_CLI_REQUEST_ERROR");
        assert_eq!(err.to_string(), "KEYRANGE_CLI_REQUEST_ERROR: missing start");
    }

    #[test]
    fn test_subsystem_code_kept() {
        let err: CliError = PredicateError::UnsupportedColumn {
            field: "payload".into(),
            column_type: "blob".into(),
        }
        .into();
        assert_eq!(err.code(), CliErrorCode::CompileError);
        assert_eq!(err.code_str(), "KEYRANGE_UNSUPPORTED_COLUMN");

        let err: CliError = IndexError::EmptyIndexName.into();
        assert_eq!(err.code_str(), "KEYRANGE_INDEX_INVALID");
    }

    #[test]
    fn test_json_syntax_is_request_error() {
        let e = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert_eq!(CliError::from(e).code(), CliErrorCode::RequestError);
    }
}
