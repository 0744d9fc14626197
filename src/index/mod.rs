//! Index metadata subsystem
//!
//! Describes the host's composite indexes and manages their
//! counterparts in the document store.
//!
//! # Design Principles
//!
//! - Descriptors are validated once and read-only afterwards
//! - Shared across compilations through `Arc`, no locking
//! - Key order is the host's key order everywhere

mod catalog;
mod column;
mod definition;
mod descriptor;
mod errors;
mod registry;

pub use catalog::{create_index, drop_index, IndexCatalog, MemoryCatalog};
pub use column::{ColumnType, TypeClass};
pub use definition::{order_document, IndexDefinition, KeyPattern};
pub use descriptor::{
    index_name, IndexDescriptor, KeyPartDescriptor, DEFAULT_MAX_KEY_PARTS, PRIMARY_KEY_NAME,
};
pub use errors::{IndexError, IndexResult};
pub use registry::{IndexId, IndexRegistry};
