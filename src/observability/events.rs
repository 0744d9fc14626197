//! Observable events
//!
//! Events are explicit and typed; the string form is stable.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Compiler configuration loaded
    ConfigLoaded,

    // Range compilation
    /// A scan range was compiled into a predicate document
    RangeCompiled,
    /// The index id did not resolve; full scan implied
    RangeNoIndex,
    /// A key part's column type cannot be range-compiled
    RangeUnsupportedColumn,

    // Index lifecycle
    /// Index created in a catalog
    IndexCreated,
    /// Index dropped from a catalog
    IndexDropped,
    /// Index definition rejected
    IndexRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RangeCompiled => "RANGE_COMPILED",
            Event::RangeNoIndex => "RANGE_NO_INDEX",
            Event::RangeUnsupportedColumn => "RANGE_UNSUPPORTED_COLUMN",
            Event::IndexCreated => "INDEX_CREATED",
            Event::IndexDropped => "INDEX_DROPPED",
            Event::IndexRejected => "INDEX_REJECTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
