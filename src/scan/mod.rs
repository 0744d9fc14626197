//! Index scan request model
//!
//! A scan is a start boundary and an optional end boundary over one
//! composite index. Each boundary carries packed key bytes, a presence
//! mask over the key parts, and a find semantic.

mod bound;
mod find;

pub use bound::{KeyBound, KeyCursor, PartPresenceMask};
pub use find::{FindSemantic, HostFindFlag};
