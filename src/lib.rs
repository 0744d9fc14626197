//! keyrange - compile composite index key ranges into document predicates
//!
//! A relational host hands over an index scan as packed start/end keys
//! plus part presence masks and find flags. `predicate::RangeCompiler`
//! turns that into a `{field: {$op: literal}}` document a document
//! engine can evaluate.

pub mod cli;
pub mod config;
pub mod index;
pub mod observability;
pub mod predicate;
pub mod scan;
