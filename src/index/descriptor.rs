//! Key part and index descriptors
//!
//! A descriptor is validated once at construction and is read-only
//! afterwards; compilations share it through `Arc` without locking.

use std::collections::HashSet;

use super::column::{ColumnType, TypeClass};
use super::errors::{IndexError, IndexResult};

/// Maximum number of key parts in one index unless configured otherwise
pub const DEFAULT_MAX_KEY_PARTS: usize = 16;

/// Name the host gives its primary key
pub const PRIMARY_KEY_NAME: &str = "PRIMARY";

/// Static metadata for one column of a composite key.
///
/// The packed key stores each part in `store_length` bytes: an optional
/// leading null-indicator byte, any length prefix, then the last
/// `value_length` bytes hold the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPartDescriptor {
    /// Field name, unique within the index
    pub name: String,
    /// Host column type, kept for error reporting
    pub column_type: Option<ColumnType>,
    /// Decoding class
    pub type_class: TypeClass,
    /// Logical width of the value in bytes
    pub value_length: usize,
    /// Bytes occupied in the packed key, including the null indicator
    pub store_length: usize,
    /// Whether a leading indicator byte flags SQL NULL
    pub nullable: bool,
    /// Whether the part indexes only a prefix of a wider text column
    pub is_partial_key: bool,
}

impl KeyPartDescriptor {
    /// Creates a non-null part whose stored region is exactly the value
    pub fn new(name: impl Into<String>, type_class: TypeClass, value_length: usize) -> Self {
        Self {
            name: name.into(),
            column_type: None,
            type_class,
            value_length,
            store_length: value_length,
            nullable: false,
            is_partial_key: false,
        }
    }

    /// Creates a part from a host column, deriving the decoding class
    pub fn from_column(
        name: impl Into<String>,
        column_type: ColumnType,
        unsigned: bool,
        binary: bool,
        value_length: usize,
    ) -> Self {
        let mut part = Self::new(name, column_type.type_class(unsigned, binary), value_length);
        part.column_type = Some(column_type);
        part
    }

    /// Marks the part nullable, adding the indicator byte to the stored region
    pub fn nullable(mut self) -> Self {
        if !self.nullable {
            self.nullable = true;
            self.store_length = self.store_length.saturating_add(1);
        }
        self
    }

    /// Overrides the stored width (e.g. to include a length prefix)
    pub fn with_store_length(mut self, store_length: usize) -> Self {
        self.store_length = store_length;
        self
    }

    /// Marks the part as indexing only a prefix of its column
    pub fn prefix(mut self) -> Self {
        self.is_partial_key = true;
        self
    }

    /// Offset of the value inside the part's stored region
    pub fn value_offset(&self) -> usize {
        self.store_length.saturating_sub(self.value_length)
    }

    /// Name of the column type for errors: the host type if known,
    /// otherwise the decoding class.
    pub fn type_name(&self) -> String {
        match self.column_type {
            Some(ty) => ty.as_str().to_string(),
            None => format!("{:?}", self.type_class).to_lowercase(),
        }
    }

    fn validate(&self) -> IndexResult<()> {
        let required = self
            .value_length
            .checked_add(usize::from(self.nullable))
            .ok_or_else(|| IndexError::ValueLengthOverflow {
                field: self.name.clone(),
                value_length: self.value_length,
            })?;
        if self.store_length < required {
            return Err(IndexError::StoreLengthTooSmall {
                field: self.name.clone(),
                store_length: self.store_length,
                value_length: self.value_length,
            });
        }
        Ok(())
    }
}

/// An index: ordered key parts plus uniqueness flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDescriptor {
    name: String,
    parts: Vec<KeyPartDescriptor>,
    primary: bool,
    unique: bool,
}

impl IndexDescriptor {
    /// Creates a validated descriptor with the default part limit
    pub fn new(name: impl Into<String>, parts: Vec<KeyPartDescriptor>) -> IndexResult<Self> {
        Self::with_max_parts(name, parts, DEFAULT_MAX_KEY_PARTS)
    }

    /// Creates a validated descriptor allowing at most `max_parts` parts
    pub fn with_max_parts(
        name: impl Into<String>,
        parts: Vec<KeyPartDescriptor>,
        max_parts: usize,
    ) -> IndexResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(IndexError::EmptyIndexName);
        }
        if parts.is_empty() {
            return Err(IndexError::NoKeyParts(name));
        }
        if parts.len() > max_parts {
            return Err(IndexError::TooManyKeyParts {
                index: name,
                count: parts.len(),
                max: max_parts,
            });
        }

        let mut seen = HashSet::with_capacity(parts.len());
        for part in &parts {
            if !seen.insert(part.name.as_str()) {
                return Err(IndexError::DuplicateField(part.name.clone()));
            }
            part.validate()?;
        }

        let primary = name == PRIMARY_KEY_NAME;
        Ok(Self {
            name,
            parts,
            primary,
            unique: primary,
        })
    }

    /// Marks the index as the table's primary key (implies unique)
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self.unique = true;
        self
    }

    /// Marks the index as unique
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parts(&self) -> &[KeyPartDescriptor] {
        &self.parts
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Total packed width of a key binding every part
    pub fn key_length(&self) -> usize {
        self.parts
            .iter()
            .fold(0usize, |total, p| total.saturating_add(p.store_length))
    }
}

/// Returns the index name, if any index is given
pub fn index_name(index: Option<&IndexDescriptor>) -> Option<&str> {
    index.map(IndexDescriptor::name)
}
