//! Configuration error types
//!
//! Error codes:
//! - KEYRANGE_CONFIG_READ
//! - KEYRANGE_CONFIG_PARSE
//! - KEYRANGE_CONFIG_INVALID

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `CompilerConfig`
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "KEYRANGE_CONFIG_READ",
            ConfigError::Parse(_) => "KEYRANGE_CONFIG_PARSE",
            ConfigError::Invalid(_) => "KEYRANGE_CONFIG_INVALID",
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConfigError::Invalid(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = ConfigError::invalid("max_field_size must be > 0");
        assert_eq!(err.code(), "KEYRANGE_CONFIG_INVALID");
        assert_eq!(err.to_string(), "invalid config: max_field_size must be > 0");

        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ConfigError::from(parse).code(), "KEYRANGE_CONFIG_PARSE");

        let read = ConfigError::Read {
            path: PathBuf::from("/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(read.code(), "KEYRANGE_CONFIG_READ");
        assert!(read.to_string().contains("/missing.json"));
    }
}
