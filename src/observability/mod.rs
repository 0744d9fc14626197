//! Observability subsystem
//!
//! Structured JSON logging with typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only and never fails the caller
//! 2. No background threads
//! 3. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use keyrange::observability::{Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Trace);
//! Logger::trace(Event::RangeCompiled, &[("index", "idx_a"), ("fields", "2")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{LogTarget, Logger, Severity};
