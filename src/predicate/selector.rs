//! Range operator selection
//!
//! Decides, per key part, which operators to emit and from which boundary
//! they are read. Numeric parts become `$et` or a `$gte`/`$lte` pair.
//! Text parts become a trailing-space tolerant `$regex` on exact match,
//! otherwise a `$gte` over the trimmed start value with an optional
//! untrimmed `$lte`.

use crate::index::{KeyPartDescriptor, TypeClass};
use crate::scan::FindSemantic;

use super::decoder::{append_numeric, append_text, stored_value, value_region};
use super::document::{FieldPredicate, Operator};
use super::errors::{PredicateError, PredicateResult};

/// Suffix matching any run of trailing spaces before the end of value
const TRAILING_SPACES: &[u8] = b"( ){0,}$";

/// One boundary as seen from the current key part
#[derive(Debug, Clone, Copy)]
pub struct PartBound<'a> {
    /// Key bytes starting at the current part
    pub key: &'a [u8],
    /// Presence bit of the current part
    pub bound: bool,
    pub semantic: FindSemantic,
}

impl<'a> PartBound<'a> {
    pub fn new(key: &'a [u8], bound: bool, semantic: FindSemantic) -> Self {
        Self {
            key,
            bound,
            semantic,
        }
    }

    /// A boundary that binds nothing
    pub fn absent() -> Self {
        Self::new(&[], false, FindSemantic::Invalid)
    }
}

/// Builds the sub-predicate for one key part.
///
/// Returns an empty predicate when nothing applies; fails only for
/// columns that cannot be range-compiled.
pub fn select_operators(
    part: &KeyPartDescriptor,
    start: &PartBound<'_>,
    end: &PartBound<'_>,
    max_field_size: usize,
) -> PredicateResult<FieldPredicate> {
    match part.type_class {
        TypeClass::SignedInt | TypeClass::UnsignedInt | TypeClass::Float => {
            Ok(select_numeric(part, start, end))
        }
        TypeClass::Text => Ok(select_text(part, start, end, max_field_size)),
        TypeClass::Unsupported => Err(PredicateError::UnsupportedColumn {
            field: part.name.clone(),
            column_type: part.type_name(),
        }),
    }
}

fn select_numeric(part: &KeyPartDescriptor, start: &PartBound<'_>, end: &PartBound<'_>) -> FieldPredicate {
    let mut predicate = FieldPredicate::new();
    if start.semantic.is_exact() {
        append_numeric(&mut predicate, start.key, part, start.bound, Operator::Et);
    } else {
        append_numeric(&mut predicate, start.key, part, start.bound, Operator::Gte);
        append_numeric(&mut predicate, end.key, part, end.bound, Operator::Lte);
    }
    predicate
}

fn select_text(
    part: &KeyPartDescriptor,
    start: &PartBound<'_>,
    end: &PartBound<'_>,
    max_field_size: usize,
) -> FieldPredicate {
    let mut predicate = FieldPredicate::new();

    // Measured on the raw start region, even when unbound or NULL
    let trim_len = value_region(start.key, part).map_or(0, trimmed_len);
    if trim_len >= max_field_size {
        return predicate;
    }

    let start_value = stored_value(start.key, part, start.bound);

    if start.semantic.is_exact() && !(part.is_partial_key && trim_len != 0) {
        if let Some(value) = start_value {
            let pattern = exact_pattern(&value[..trim_len]);
            let length = pattern.len();
            append_text(&mut predicate, Some(pattern.as_slice()), length, Operator::Regex);
        }
    } else {
        append_text(&mut predicate, start_value, trim_len, Operator::Gte);
        if end.semantic == FindSemantic::StrictlyBefore {
            let end_value = stored_value(end.key, part, end.bound);
            append_text(&mut predicate, end_value, part.value_length, Operator::Lte);
        }
    }
    predicate
}

/// Length of `value` once trailing spaces and NULs are dropped
pub fn trimmed_len(value: &[u8]) -> usize {
    value
        .iter()
        .rposition(|&b| b != b' ' && b != b'\0')
        .map_or(0, |pos| pos + 1)
}

/// `^<literal>( ){0,}$`, the literal copied unescaped
fn exact_pattern(literal: &[u8]) -> Vec<u8> {
    let mut pattern = Vec::with_capacity(1 + literal.len() + TRAILING_SPACES.len());
    pattern.push(b'^');
    pattern.extend_from_slice(literal);
    pattern.extend_from_slice(TRAILING_SPACES);
    pattern
}
