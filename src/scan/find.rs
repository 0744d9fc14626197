//! Find flags and the comparison intent they carry
//!
//! The host attaches a find flag to each boundary of an index scan. Only
//! two distinctions survive into predicate compilation: whether the start
//! is an exact match, and whether the end is a "before key" bound.

use serde::{Deserialize, Serialize};

/// Range-find flags reported by the relational host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostFindFlag {
    /// Find the first record equal to the key
    KeyExact,
    /// Record equal to the key or the next one
    KeyOrNext,
    /// Record equal to the key or the previous one
    KeyOrPrev,
    /// First record after the key
    AfterKey,
    /// Last record before the key
    BeforeKey,
    /// Key is a prefix of the record key
    Prefix,
    /// Last record with the prefix
    PrefixLast,
    /// Last record with the prefix, or the previous one
    PrefixLastOrPrev,
    /// No flag
    Invalid,
}

/// Comparator intent attached to one scan boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FindSemantic {
    /// The start key must match exactly
    ExactMatch,
    /// Generic non-exact lower bound
    GreaterOrEqualOpen,
    /// Upper bound "before this key"
    StrictlyBefore,
    /// No usable intent
    #[default]
    Invalid,
}

impl FindSemantic {
    /// Maps the flag attached to the start key
    pub fn for_start(flag: HostFindFlag) -> Self {
        match flag {
            HostFindFlag::KeyExact => FindSemantic::ExactMatch,
            HostFindFlag::Invalid => FindSemantic::Invalid,
            _ => FindSemantic::GreaterOrEqualOpen,
        }
    }

    /// Maps the flag attached to the end key
    pub fn for_end(flag: HostFindFlag) -> Self {
        match flag {
            HostFindFlag::BeforeKey => FindSemantic::StrictlyBefore,
            HostFindFlag::KeyExact => FindSemantic::ExactMatch,
            HostFindFlag::Invalid => FindSemantic::Invalid,
            _ => FindSemantic::GreaterOrEqualOpen,
        }
    }

    pub fn is_exact(&self) -> bool {
        *self == FindSemantic::ExactMatch
    }
}
