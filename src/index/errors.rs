//! Index error types
//!
//! Error codes:
//! - KEYRANGE_INDEX_INVALID (descriptor validation)
//! - KEYRANGE_INDEX_UNSUPPORTED (column cannot be indexed)
//! - KEYRANGE_INDEX_EXISTS / KEYRANGE_INDEX_NOT_FOUND (catalog)

use thiserror::Error;

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Index descriptor and catalog errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Index name is empty
    #[error("index name must not be empty")]
    EmptyIndexName,

    /// Index has no key parts
    #[error("index '{0}' has no key parts")]
    NoKeyParts(String),

    /// Index has more key parts than the configured maximum
    #[error("index '{index}' has {count} key parts (max {max})")]
    TooManyKeyParts {
        index: String,
        count: usize,
        max: usize,
    },

    /// The same field appears twice in one key
    #[error("field '{0}' appears more than once in the key")]
    DuplicateField(String),

    /// A part's stored region cannot hold its value (and null indicator)
    #[error("field '{field}': store length {store_length} cannot hold value length {value_length}")]
    StoreLengthTooSmall {
        field: String,
        store_length: usize,
        value_length: usize,
    },

    /// Value length plus the null indicator does not fit in `usize`
    #[error("field '{field}': value length {value_length} is too large")]
    ValueLengthOverflow { field: String, value_length: usize },

    /// Column type cannot be used in a key specification
    #[error("column '{field}' ({column_type}) cannot be used in key specification")]
    UnindexableColumn {
        field: String,
        column_type: String,
    },

    /// Catalog already holds an index with this name
    #[error("index '{0}' already exists")]
    IndexExists(String),

    /// Catalog holds no index with this name
    #[error("index '{0}' not found")]
    IndexNotFound(String),
}

impl IndexError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::EmptyIndexName
            | IndexError::NoKeyParts(_)
            | IndexError::TooManyKeyParts { .. }
            | IndexError::DuplicateField(_)
            | IndexError::StoreLengthTooSmall { .. }
            | IndexError::ValueLengthOverflow { .. } => "KEYRANGE_INDEX_INVALID",
            IndexError::UnindexableColumn { .. } => "KEYRANGE_INDEX_UNSUPPORTED",
            IndexError::IndexExists(_) => "KEYRANGE_INDEX_EXISTS",
            IndexError::IndexNotFound(_) => "KEYRANGE_INDEX_NOT_FOUND",
        }
    }
}
