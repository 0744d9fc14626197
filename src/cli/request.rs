//! Request shapes read from stdin
//!
//! ```json
//! {
//!   "index": {"name": "idx_a", "parts": [{"name": "a", "type": "long", "length": 4}]},
//!   "start": {"key": "BwAAAA==", "keypart_map": 1, "flag": "key_exact"},
//!   "end": null
//! }
//! ```
//!
//! Key bytes are standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::index::{ColumnType, IndexDescriptor, IndexResult, KeyPartDescriptor};
use crate::scan::{FindSemantic, HostFindFlag, KeyBound, PartPresenceMask};

/// One column of the index as the host describes it
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyPartSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default)]
    pub binary: bool,
    /// Value width in bytes
    pub length: usize,
    /// Stored width; defaults to `length` plus the null indicator
    #[serde(default)]
    pub store_length: Option<usize>,
    #[serde(default)]
    pub nullable: bool,
    /// Part covers only a prefix of the column
    #[serde(default)]
    pub prefix: bool,
}

impl KeyPartSpec {
    pub fn to_descriptor(&self) -> KeyPartDescriptor {
        let mut part = KeyPartDescriptor::from_column(
            self.name.clone(),
            self.column_type,
            self.unsigned,
            self.binary,
            self.length,
        );
        if self.nullable {
            part = part.nullable();
        }
        if let Some(store_length) = self.store_length {
            part = part.with_store_length(store_length);
        }
        if self.prefix {
            part = part.prefix();
        }
        part
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexSpec {
    pub name: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub unique: bool,
    pub parts: Vec<KeyPartSpec>,
}

impl IndexSpec {
    /// Validated descriptor allowing at most `max_key_parts` parts
    pub fn to_descriptor(&self, max_key_parts: usize) -> IndexResult<IndexDescriptor> {
        let parts = self.parts.iter().map(KeyPartSpec::to_descriptor).collect();
        let mut index = IndexDescriptor::with_max_parts(self.name.clone(), parts, max_key_parts)?;
        if self.primary {
            index = index.primary();
        }
        if self.unique {
            index = index.unique();
        }
        Ok(index)
    }
}

/// One scan boundary
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundSpec {
    /// Base64 packed key
    pub key: String,
    pub keypart_map: PartPresenceMask,
    pub flag: HostFindFlag,
}

impl BoundSpec {
    pub fn decode_key(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.key)
    }

    /// Boundary over `key` with the given flag mapping
    pub fn to_bound<'a>(&self, key: &'a [u8], semantic: fn(HostFindFlag) -> FindSemantic) -> KeyBound<'a> {
        KeyBound::new(key, self.keypart_map, semantic(self.flag))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanRequest {
    pub index: IndexSpec,
    pub start: BoundSpec,
    #[serde(default)]
    pub end: Option<BoundSpec>,
}
