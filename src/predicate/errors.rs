//! Predicate compilation errors
//!
//! Error codes:
//! - KEYRANGE_UNSUPPORTED_COLUMN (REJECT)
//!
//! Unknown indexes, NULL parts and unreadable values are not errors; they
//! contribute nothing to the document.

use thiserror::Error;

/// Result type for predicate compilation
pub type PredicateResult<T> = Result<T, PredicateError>;

/// Failures that abort a whole compilation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// Key part whose column cannot be range-compiled (binary strings, blobs)
    #[error("key part '{field}' ({column_type}) cannot be range-compiled")]
    UnsupportedColumn { field: String, column_type: String },
}

impl PredicateError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            PredicateError::UnsupportedColumn { .. } => "KEYRANGE_UNSUPPORTED_COLUMN",
        }
    }

    /// Field that caused the failure
    pub fn field(&self) -> &str {
        match self {
            PredicateError::UnsupportedColumn { field, .. } => field,
        }
    }
}
