//! Compiler configuration
//!
//! JSON file, every field optional:
//!
//! ```json
//! { "max_field_size": 1024, "max_key_parts": 16, "log_level": "info" }
//! ```

mod errors;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::index::DEFAULT_MAX_KEY_PARTS;
use crate::observability::Severity;
use crate::predicate::{CompileLimits, DEFAULT_MAX_FIELD_SIZE};

pub use errors::{ConfigError, ConfigResult};

/// Width of the part presence mask
pub const MAX_MASK_PARTS: usize = 64;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    /// Maximum trimmed text literal in bytes (default 1024)
    #[serde(default = "default_max_field_size")]
    pub max_field_size: usize,

    /// Maximum key parts per index (default 16, at most 64)
    #[serde(default = "default_max_key_parts")]
    pub max_key_parts: usize,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_field_size() -> usize {
    DEFAULT_MAX_FIELD_SIZE
}
fn default_max_key_parts() -> usize {
    DEFAULT_MAX_KEY_PARTS
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_field_size: default_max_field_size(),
            max_key_parts: default_max_key_parts(),
            log_level: default_log_level(),
        }
    }
}

impl CompilerConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Loads `path` if it exists, otherwise returns the defaults
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses and validates a JSON document
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: CompilerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate ranges and the log level
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_field_size == 0 {
            return Err(ConfigError::invalid("max_field_size must be > 0"));
        }

        if self.max_key_parts == 0 {
            return Err(ConfigError::invalid("max_key_parts must be > 0"));
        }

        if self.max_key_parts > MAX_MASK_PARTS {
            return Err(ConfigError::invalid(format!(
                "max_key_parts must be <= {}, got {}",
                MAX_MASK_PARTS, self.max_key_parts
            )));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed log level
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level.parse().map_err(ConfigError::Invalid)
    }

    /// Limits handed to each compiler
    pub fn limits(&self) -> CompileLimits {
        CompileLimits {
            max_field_size: self.max_field_size,
            max_key_parts: self.max_key_parts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = CompilerConfig::from_json("{}").unwrap();
        assert_eq!(config, CompilerConfig::default());
        assert_eq!(config.limits(), CompileLimits::default());
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_overrides() {
        let config =
            CompilerConfig::from_json(r#"{"max_field_size": 64, "log_level": "trace"}"#).unwrap();
        assert_eq!(config.limits().max_field_size, 64);
        assert_eq!(config.limits().max_key_parts, 16);
        assert_eq!(config.severity().unwrap(), Severity::Trace);
    }

    #[test]
    fn test_rejects_out_of_range() {
        for body in [
            r#"{"max_field_size": 0}"#,
            r#"{"max_key_parts": 0}"#,
            r#"{"max_key_parts": 65}"#,
            r#"{"log_level": "verbose"}"#,
        ] {
            let err = CompilerConfig::from_json(body).unwrap_err();
            assert_eq!(err.code(), "KEYRANGE_CONFIG_INVALID", "{}", body);
        }
    }

    #[test]
    fn test_rejects_unknown_field() {
        let err = CompilerConfig::from_json(r#"{"max_wal_size": 1}"#).unwrap_err();
        assert_eq!(err.code(), "KEYRANGE_CONFIG_PARSE");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"max_key_parts": 64}}"#).unwrap();

        let config = CompilerConfig::load(file.path()).unwrap();
        assert_eq!(config.max_key_parts, 64);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keyrange.json");

        assert_eq!(CompilerConfig::load(&path).unwrap_err().code(), "KEYRANGE_CONFIG_READ");
        assert_eq!(
            CompilerConfig::load_or_default(&path).unwrap(),
            CompilerConfig::default()
        );
    }
}
