//! Index definitions pushed to the document store
//!
//! The store indexes fields by a key pattern `{field: 1, ...}` in key
//! order. Only ascending order is expressed.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::column::TypeClass;
use super::descriptor::IndexDescriptor;
use super::errors::{IndexError, IndexResult};

/// Ordered `{field: direction}` document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPattern {
    entries: Vec<(String, i32)>,
}

impl KeyPattern {
    /// Ascending pattern over the index's parts, in key order
    pub fn ascending(index: &IndexDescriptor) -> Self {
        Self {
            entries: index.parts().iter().map(|p| (p.name.clone(), 1)).collect(),
        }
    }

    pub fn entries(&self) -> &[(String, i32)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::from(*v)))
                .collect(),
        )
    }
}

impl Serialize for KeyPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, direction) in &self.entries {
            map.serialize_entry(field, direction)?;
        }
        map.end()
    }
}

/// Everything the store needs to create one index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDefinition {
    pub name: String,
    pub key: KeyPattern,
    pub unique: bool,
    /// Uniqueness also enforced on missing fields (primary key only)
    pub enforced: bool,
}

impl IndexDefinition {
    /// Builds the definition, rejecting columns the store cannot index
    pub fn from_descriptor(index: &IndexDescriptor) -> IndexResult<Self> {
        if let Some(part) = index
            .parts()
            .iter()
            .find(|p| p.type_class == TypeClass::Unsupported)
        {
            return Err(IndexError::UnindexableColumn {
                field: part.name.clone(),
                column_type: part.type_name(),
            });
        }

        Ok(Self {
            name: index.name().to_string(),
            key: KeyPattern::ascending(index),
            unique: index.is_unique(),
            enforced: index.is_primary(),
        })
    }
}

/// Sort order document for scans over the index
pub fn order_document(index: &IndexDescriptor) -> KeyPattern {
    KeyPattern::ascending(index)
}
