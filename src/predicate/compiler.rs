//! Composite range compiler
//!
//! Walks an index's key parts in order, reading both boundary keys in
//! lockstep, and collects one sub-predicate per part. The walk stops as
//! soon as neither boundary binds any further part.
//!
//! Compilation is a pure function of the descriptor and the two keys:
//! no shared state, no I/O. A compiler can be shared freely across
//! threads.

use crate::index::{IndexDescriptor, IndexId, IndexRegistry, DEFAULT_MAX_KEY_PARTS};
use crate::observability::{Event, Logger, Severity};
use crate::scan::{FindSemantic, KeyBound, KeyCursor};

use super::document::PredicateDocument;
use super::errors::PredicateResult;
use super::selector::{select_operators, PartBound};

/// Maximum trimmed text literal, in bytes
pub const DEFAULT_MAX_FIELD_SIZE: usize = 1024;

/// Fixed bounds applied to every compilation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileLimits {
    /// Text parts whose trimmed start value reaches this size are omitted
    pub max_field_size: usize,
    /// Parts beyond this position are never visited
    pub max_key_parts: usize,
}

impl Default for CompileLimits {
    fn default() -> Self {
        Self {
            max_field_size: DEFAULT_MAX_FIELD_SIZE,
            max_key_parts: DEFAULT_MAX_KEY_PARTS,
        }
    }
}

/// Turns index scan boundaries into predicate documents
#[derive(Debug, Clone, Default)]
pub struct RangeCompiler {
    limits: CompileLimits,
}

impl RangeCompiler {
    pub fn new(limits: CompileLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> CompileLimits {
        self.limits
    }

    /// Compiles a scan over the index registered under `id`.
    ///
    /// Unknown ids compile to an empty document.
    pub fn compile_for(
        &self,
        registry: &IndexRegistry,
        id: IndexId,
        start: &KeyBound<'_>,
        end: Option<&KeyBound<'_>>,
    ) -> PredicateResult<PredicateDocument> {
        self.compile(registry.resolve(id).map(|index| index.as_ref()), start, end)
    }

    /// Compiles a scan between `start` and the optional `end` boundary.
    ///
    /// A missing index compiles to an empty document, which callers treat
    /// as a full scan. On error no partial document is returned.
    pub fn compile(
        &self,
        index: Option<&IndexDescriptor>,
        start: &KeyBound<'_>,
        end: Option<&KeyBound<'_>>,
    ) -> PredicateResult<PredicateDocument> {
        let Some(index) = index else {
            Logger::trace(Event::RangeNoIndex, &[]);
            return Ok(PredicateDocument::new());
        };

        let mut start_cursor = KeyCursor::new(start);
        let mut end_cursor = end.map_or_else(KeyCursor::absent, KeyCursor::new);
        let end_semantic = end.map_or(FindSemantic::Invalid, |bound| bound.semantic);

        let mut document = PredicateDocument::new();
        let mut visited = 0usize;

        for part in index.parts().iter().take(self.limits.max_key_parts) {
            if !start_cursor.has_bound_parts() && !end_cursor.has_bound_parts() {
                break;
            }

            let lower = PartBound::new(start_cursor.remaining(), start_cursor.is_bound(), start.semantic);
            let upper = PartBound::new(end_cursor.remaining(), end_cursor.is_bound(), end_semantic);

            let predicate = match select_operators(part, &lower, &upper, self.limits.max_field_size) {
                Ok(predicate) => predicate,
                Err(err) => {
                    Logger::warn(
                        Event::RangeUnsupportedColumn,
                        &[
                            ("index", index.name()),
                            ("field", err.field()),
                            ("code", err.code()),
                        ],
                    );
                    return Err(err);
                }
            };
            document.insert(part.name.as_str(), predicate);

            start_cursor.advance(part.store_length);
            end_cursor.advance(part.store_length);
            visited += 1;
        }

        if Logger::enabled(Severity::Trace) {
            let visited = visited.to_string();
            let fields = document.len().to_string();
            Logger::trace(
                Event::RangeCompiled,
                &[
                    ("index", index.name()),
                    ("parts_visited", visited.as_str()),
                    ("fields", fields.as_str()),
                ],
            );
        }

        Ok(document)
    }
}
