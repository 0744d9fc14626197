//! Key-range predicate compilation
//!
//! Translates the packed start/end keys of an index scan into a
//! predicate document (`$et`, `$gte`, `$lte`, `$regex`) that a
//! document engine can evaluate.
//!
//! # Design Principles
//!
//! - Pure computation over immutable descriptors and caller-owned keys
//! - Absent, NULL or unreadable values contribute nothing, silently
//! - A non-compilable column fails the whole compilation

mod compiler;
mod decoder;
mod document;
mod errors;
mod selector;

pub use compiler::{CompileLimits, RangeCompiler, DEFAULT_MAX_FIELD_SIZE};
pub use decoder::{append_numeric, append_text, stored_value, value_region, ValueCodec};
pub use document::{FieldPredicate, Literal, Operator, PredicateDocument};
pub use errors::{PredicateError, PredicateResult};
pub use selector::{select_operators, trimmed_len, PartBound};
