//! Per-table index registry
//!
//! Resolves the host's index number to a shared descriptor. Unknown
//! numbers (including the host's "no index" sentinel) resolve to `None`.

use std::sync::Arc;

use super::descriptor::IndexDescriptor;

/// Position of an index within its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexId(pub usize);

impl IndexId {
    /// The host's "no index" sentinel
    pub const NONE: IndexId = IndexId(usize::MAX);
}

/// Ordered set of a table's indexes
#[derive(Debug, Clone, Default)]
pub struct IndexRegistry {
    indexes: Vec<Arc<IndexDescriptor>>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an index and returns its id
    pub fn register(&mut self, index: IndexDescriptor) -> IndexId {
        self.indexes.push(Arc::new(index));
        IndexId(self.indexes.len() - 1)
    }

    /// Resolves an id to its descriptor
    pub fn resolve(&self, id: IndexId) -> Option<&Arc<IndexDescriptor>> {
        self.indexes.get(id.0)
    }

    /// Finds an index by name
    pub fn find(&self, name: &str) -> Option<IndexId> {
        self.indexes
            .iter()
            .position(|idx| idx.name() == name)
            .map(IndexId)
    }

    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<IndexDescriptor>> {
        self.indexes.iter()
    }
}
