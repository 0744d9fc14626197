//! Index lifecycle against a document-store catalog
//!
//! The catalog is the remote collection's index list. `IndexCatalog` is
//! the seam; `MemoryCatalog` backs tests and the CLI.

use super::definition::IndexDefinition;
use super::descriptor::IndexDescriptor;
use super::errors::{IndexError, IndexResult};
use crate::observability::{Event, Logger};

/// A collection's index catalog
pub trait IndexCatalog {
    /// Creates an index. Fails if the name is taken.
    fn create_index(&mut self, definition: &IndexDefinition) -> IndexResult<()>;

    /// Drops an index by name. Fails if no such index exists.
    fn drop_index(&mut self, name: &str) -> IndexResult<()>;

    /// Lists indexes in creation order
    fn list_indexes(&self) -> Vec<&IndexDefinition>;
}

/// In-memory catalog
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    indexes: Vec<IndexDefinition>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&IndexDefinition> {
        self.indexes.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}

impl IndexCatalog for MemoryCatalog {
    fn create_index(&mut self, definition: &IndexDefinition) -> IndexResult<()> {
        if self.get(&definition.name).is_some() {
            return Err(IndexError::IndexExists(definition.name.clone()));
        }
        self.indexes.push(definition.clone());
        Ok(())
    }

    fn drop_index(&mut self, name: &str) -> IndexResult<()> {
        let pos = self
            .indexes
            .iter()
            .position(|d| d.name == name)
            .ok_or_else(|| IndexError::IndexNotFound(name.to_string()))?;
        self.indexes.remove(pos);
        Ok(())
    }

    fn list_indexes(&self) -> Vec<&IndexDefinition> {
        self.indexes.iter().collect()
    }
}

/// Builds the definition for `index` and creates it in `catalog`
pub fn create_index<C: IndexCatalog + ?Sized>(
    catalog: &mut C,
    index: &IndexDescriptor,
) -> IndexResult<IndexDefinition> {
    let definition = match IndexDefinition::from_descriptor(index) {
        Ok(definition) => definition,
        Err(e) => {
            let reason = e.to_string();
            Logger::warn(
                Event::IndexRejected,
                &[("index", index.name()), ("reason", reason.as_str())],
            );
            return Err(e);
        }
    };

    catalog.create_index(&definition)?;

    let unique = definition.unique.to_string();
    Logger::info(
        Event::IndexCreated,
        &[("index", definition.name.as_str()), ("unique", unique.as_str())],
    );
    Ok(definition)
}

/// Drops `index` from `catalog`
pub fn drop_index<C: IndexCatalog + ?Sized>(
    catalog: &mut C,
    index: &IndexDescriptor,
) -> IndexResult<()> {
    catalog.drop_index(index.name())?;
    Logger::info(Event::IndexDropped, &[("index", index.name())]);
    Ok(())
}
