//! Scan boundaries: packed key bytes, part presence and cursors

use serde::{Deserialize, Serialize};

use super::find::FindSemantic;

/// One bit per key part, least-significant first, marking the parts the
/// caller actually bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartPresenceMask(u64);

impl PartPresenceMask {
    /// No part bound
    pub const EMPTY: PartPresenceMask = PartPresenceMask(0);

    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Mask binding the leading `count` parts
    pub fn leading(count: u32) -> Self {
        if count >= u64::BITS {
            Self(u64::MAX)
        } else {
            Self((1u64 << count) - 1)
        }
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether the current (lowest) part is bound
    pub fn current_bound(&self) -> bool {
        self.0 & 1 == 1
    }

    /// Moves to the next part
    pub fn advance(&mut self) {
        self.0 >>= 1;
    }
}

/// One boundary of an index scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBound<'a> {
    /// Packed key bytes, parts laid out back to back
    pub key: &'a [u8],
    /// Which leading parts are bound
    pub keypart_map: PartPresenceMask,
    /// Comparator intent
    pub semantic: FindSemantic,
}

impl<'a> KeyBound<'a> {
    pub fn new(key: &'a [u8], keypart_map: PartPresenceMask, semantic: FindSemantic) -> Self {
        Self {
            key,
            keypart_map,
            semantic,
        }
    }

    /// Exact-match start bound over the leading `parts` parts
    pub fn exact(key: &'a [u8], parts: u32) -> Self {
        Self::new(key, PartPresenceMask::leading(parts), FindSemantic::ExactMatch)
    }

    /// Non-exact lower bound over the leading `parts` parts
    pub fn from_key(key: &'a [u8], parts: u32) -> Self {
        Self::new(
            key,
            PartPresenceMask::leading(parts),
            FindSemantic::GreaterOrEqualOpen,
        )
    }

    /// "Before key" upper bound over the leading `parts` parts
    pub fn before(key: &'a [u8], parts: u32) -> Self {
        Self::new(key, PartPresenceMask::leading(parts), FindSemantic::StrictlyBefore)
    }
}

/// Read position within one boundary's key.
///
/// Moves forward one part at a time and never rewinds.
#[derive(Debug, Clone, Copy)]
pub struct KeyCursor<'a> {
    key: &'a [u8],
    offset: usize,
    mask: PartPresenceMask,
}

impl<'a> KeyCursor<'a> {
    pub fn new(bound: &KeyBound<'a>) -> Self {
        Self {
            key: bound.key,
            offset: 0,
            mask: bound.keypart_map,
        }
    }

    /// Cursor for an absent boundary: nothing bound, nothing to read
    pub fn absent() -> Self {
        Self {
            key: &[],
            offset: 0,
            mask: PartPresenceMask::EMPTY,
        }
    }

    /// Bytes from the current part to the end of the key
    pub fn remaining(&self) -> &'a [u8] {
        self.key.get(self.offset..).unwrap_or(&[])
    }

    /// Whether the current part is bound
    pub fn is_bound(&self) -> bool {
        self.mask.current_bound()
    }

    /// Whether any later part is still bound
    pub fn has_bound_parts(&self) -> bool {
        !self.mask.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Steps past a part occupying `store_length` bytes
    pub fn advance(&mut self, store_length: usize) {
        self.offset = self.offset.saturating_add(store_length);
        self.mask.advance();
    }
}
