//! Range Compiler Tests
//!
//! Tests for compilation invariants:
//! - Numeric values survive decoding at every supported width
//! - Text equality tolerates trailing spaces, text ranges keep the raw end key
//! - The walk stops at the last bound part
//! - A non-compilable column fails the whole compilation

use std::sync::Arc;
use std::thread;

use keyrange::index::{ColumnType, IndexDescriptor, IndexId, IndexRegistry, KeyPartDescriptor, TypeClass};
use keyrange::predicate::{CompileLimits, Literal, Operator, PredicateError, RangeCompiler};
use keyrange::scan::{FindSemantic, KeyBound, PartPresenceMask};
use regex::Regex;
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn single_part(class: TypeClass, width: usize) -> IndexDescriptor {
    IndexDescriptor::new("idx_v", vec![KeyPartDescriptor::new("v", class, width)]).unwrap()
}

fn compile_exact(index: &IndexDescriptor, key: &[u8]) -> serde_json::Value {
    RangeCompiler::default()
        .compile(Some(index), &KeyBound::exact(key, 1), None)
        .unwrap()
        .to_json()
}

fn padded(value: &[u8], width: usize, pad: u8) -> Vec<u8> {
    let mut key = value.to_vec();
    key.resize(width, pad);
    key
}

// =============================================================================
// Numeric Decoding Tests
// =============================================================================

/// Signed extremes round-trip at widths 1, 2, 4 and 8.
#[test]
fn test_signed_round_trip() {
    let cases: Vec<(usize, Vec<u8>, i64)> = vec![
        (1, i8::MIN.to_le_bytes().to_vec(), i64::from(i8::MIN)),
        (1, i8::MAX.to_le_bytes().to_vec(), i64::from(i8::MAX)),
        (2, i16::MIN.to_le_bytes().to_vec(), i64::from(i16::MIN)),
        (2, i16::MAX.to_le_bytes().to_vec(), i64::from(i16::MAX)),
        (4, i32::MIN.to_le_bytes().to_vec(), i64::from(i32::MIN)),
        (4, i32::MAX.to_le_bytes().to_vec(), i64::from(i32::MAX)),
        (8, i64::MIN.to_le_bytes().to_vec(), i64::MIN),
        (8, i64::MAX.to_le_bytes().to_vec(), i64::MAX),
    ];

    for (width, key, expected) in cases {
        let index = single_part(TypeClass::SignedInt, width);
        assert_eq!(compile_exact(&index, &key), json!({"v": {"$et": expected}}), "width {}", width);
    }
}

/// -1 stored in three bytes decodes as -1.
#[test]
fn test_24_bit_sign_extension() {
    let index = single_part(TypeClass::SignedInt, 3);
    assert_eq!(compile_exact(&index, &[0xFF, 0xFF, 0xFF]), json!({"v": {"$et": -1}}));
}

/// Unsigned 64-bit values above i64::MAX become exact decimals.
#[test]
fn test_unsigned_64_overflow() {
    let index = single_part(TypeClass::UnsignedInt, 8);
    let doc = RangeCompiler::default()
        .compile(Some(&index), &KeyBound::exact(&u64::MAX.to_le_bytes(), 1), None)
        .unwrap();

    let literal = doc.get("v").and_then(|p| p.get(Operator::Et)).unwrap();
    assert_eq!(literal, &Literal::Decimal("18446744073709551615".to_string()));
    assert_eq!(doc.to_json(), json!({"v": {"$et": "18446744073709551615"}}));
}

/// A lower bound alone produces no upper bound.
#[test]
fn test_float_lower_bound_only() {
    let index = single_part(TypeClass::Float, 4);
    let key = 3.5f32.to_le_bytes();

    let doc = RangeCompiler::default()
        .compile(Some(&index), &KeyBound::from_key(&key, 1), None)
        .unwrap();
    assert_eq!(doc.to_json(), json!({"v": {"$gte": 3.5}}));
}

/// Range over an unsigned column with both bounds.
#[test]
fn test_closed_numeric_range() {
    let index = single_part(TypeClass::UnsignedInt, 2);
    let start_key = 10u16.to_le_bytes();
    let end_key = 20u16.to_le_bytes();

    let doc = RangeCompiler::default()
        .compile(
            Some(&index),
            &KeyBound::from_key(&start_key, 1),
            Some(&KeyBound::before(&end_key, 1)),
        )
        .unwrap();
    assert_eq!(doc.to_json(), json!({"v": {"$gte": 10, "$lte": 20}}));
}

/// A NULL start value contributes nothing, the end bound still applies.
#[test]
fn test_null_start_value() {
    let index = IndexDescriptor::new(
        "idx_v",
        vec![KeyPartDescriptor::new("v", TypeClass::SignedInt, 4).nullable()],
    )
    .unwrap();
    let start_key = [1u8, 0, 0, 0, 0];
    let mut end_key = vec![0u8];
    end_key.extend_from_slice(&50i32.to_le_bytes());

    let doc = RangeCompiler::default()
        .compile(
            Some(&index),
            &KeyBound::from_key(&start_key, 1),
            Some(&KeyBound::before(&end_key, 1)),
        )
        .unwrap();
    assert_eq!(doc.to_json(), json!({"v": {"$lte": 50}}));
}

// =============================================================================
// Text Tests
// =============================================================================

/// Exact match on a full column becomes a trailing-space tolerant pattern.
#[test]
fn test_text_exact_match() {
    let index = single_part(TypeClass::Text, 10);
    let key = padded(b"hello", 10, b' ');

    let doc = compile_exact(&index, &key);
    assert_eq!(doc, json!({"v": {"$regex": "^hello( ){0,}$"}}));

    let pattern = Regex::new(doc["v"]["$regex"].as_str().unwrap()).unwrap();
    assert!(pattern.is_match("hello"));
    assert!(pattern.is_match("hello   "));
    assert!(!pattern.is_match("hello!"));
    assert!(!pattern.is_match("say hello"));
}

/// Range: trimmed start, raw end at full width.
#[test]
fn test_text_range_keeps_raw_end() {
    let index = single_part(TypeClass::Text, 8);
    let start_key = padded(b"ab", 8, b' ');
    let end_key = padded(b"abz", 8, b'\0');

    let doc = RangeCompiler::default()
        .compile(
            Some(&index),
            &KeyBound::from_key(&start_key, 1),
            Some(&KeyBound::before(&end_key, 1)),
        )
        .unwrap();

    let pred = doc.get("v").unwrap();
    assert_eq!(pred.get(Operator::Gte), Some(&Literal::text(&b"ab"[..])));
    assert_eq!(pred.get(Operator::Lte), Some(&Literal::text(&b"abz\0\0\0\0\0"[..])));
    assert_eq!(doc.to_json(), json!({"v": {"$gte": "ab", "$lte": "abz\u{0}\u{0}\u{0}\u{0}\u{0}"}}));
}

/// Exact match on a prefix part falls back to a lower bound.
#[test]
fn test_text_prefix_exact_match() {
    let index = IndexDescriptor::new(
        "idx_v",
        vec![KeyPartDescriptor::from_column("v", ColumnType::Varchar, false, false, 5).prefix()],
    )
    .unwrap();

    assert_eq!(compile_exact(&index, b"abcde"), json!({"v": {"$gte": "abcde"}}));
}

/// Oversized trimmed literals are dropped without error.
#[test]
fn test_text_over_field_size() {
    let index = single_part(TypeClass::Text, 32);
    let key = padded(b"0123456789abcdef", 32, b' ');

    let compiler = RangeCompiler::new(CompileLimits {
        max_field_size: 16,
        ..CompileLimits::default()
    });
    let doc = compiler.compile(Some(&index), &KeyBound::exact(&key, 1), None).unwrap();
    assert!(doc.is_empty());
}

// =============================================================================
// Composite Walk Tests
// =============================================================================

/// Only the bound leading part is compiled.
#[test]
fn test_partial_composite_key() {
    let index = IndexDescriptor::new(
        "idx_id_name",
        vec![
            KeyPartDescriptor::new("id", TypeClass::SignedInt, 4),
            KeyPartDescriptor::new("name", TypeClass::Text, 6),
        ],
    )
    .unwrap();
    let mut key = 42i32.to_le_bytes().to_vec();
    key.extend_from_slice(b"bob   ");

    let start = KeyBound::new(&key, PartPresenceMask::new(0b01), FindSemantic::ExactMatch);
    let doc = RangeCompiler::default().compile(Some(&index), &start, None).unwrap();

    assert_eq!(doc.to_json(), json!({"id": {"$et": 42}}));
    assert_eq!(doc.len(), 1);
}

/// Nullable parts advance the cursor by their full stored width.
#[test]
fn test_nullable_parts_offsets() {
    let index = IndexDescriptor::new(
        "idx_ab",
        vec![
            KeyPartDescriptor::new("a", TypeClass::SignedInt, 2).nullable(),
            KeyPartDescriptor::new("b", TypeClass::UnsignedInt, 1).nullable(),
        ],
    )
    .unwrap();
    let key = [0u8, 0x2C, 0x01, 0, 0xFE];

    assert_eq!(index.key_length(), 5);
    let doc = RangeCompiler::default()
        .compile(Some(&index), &KeyBound::exact(&key, 2), None)
        .unwrap();
    assert_eq!(doc.to_json(), json!({"a": {"$et": 300}, "b": {"$et": 254}}));
}

/// Field order in the document follows key order.
#[test]
fn test_field_order_follows_key() {
    let index = IndexDescriptor::new(
        "idx_zy",
        vec![
            KeyPartDescriptor::new("z", TypeClass::SignedInt, 1),
            KeyPartDescriptor::new("y", TypeClass::SignedInt, 1),
        ],
    )
    .unwrap();

    let doc = RangeCompiler::default()
        .compile(Some(&index), &KeyBound::exact(&[1, 2], 2), None)
        .unwrap();
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"z":{"$et":1},"y":{"$et":2}}"#);
}

/// A key shorter than its bound parts yields only the readable ones.
#[test]
fn test_short_key_omits_unreadable_parts() {
    let index = IndexDescriptor::new(
        "idx_ab",
        vec![
            KeyPartDescriptor::new("a", TypeClass::SignedInt, 4),
            KeyPartDescriptor::new("b", TypeClass::SignedInt, 4),
        ],
    )
    .unwrap();
    let key = 5i32.to_le_bytes();

    let doc = RangeCompiler::default()
        .compile(Some(&index), &KeyBound::exact(&key, 2), None)
        .unwrap();
    assert_eq!(doc.to_json(), json!({"a": {"$et": 5}}));
}

// =============================================================================
// Failure Tests
// =============================================================================

/// A binary blob part fails the compilation and no document is returned.
#[test]
fn test_unsupported_column_fails() {
    let index = IndexDescriptor::new(
        "idx_mixed",
        vec![
            KeyPartDescriptor::new("id", TypeClass::SignedInt, 4),
            KeyPartDescriptor::from_column("payload", ColumnType::Blob, false, true, 8),
        ],
    )
    .unwrap();
    let key = [0u8; 12];

    let result = RangeCompiler::default().compile(Some(&index), &KeyBound::exact(&key, 2), None);
    assert_eq!(
        result,
        Err(PredicateError::UnsupportedColumn {
            field: "payload".to_string(),
            column_type: "blob".to_string(),
        })
    );
}

/// Unknown index ids compile to an empty document.
#[test]
fn test_unknown_index_is_empty() {
    let registry = IndexRegistry::new();
    let doc = RangeCompiler::default()
        .compile_for(&registry, IndexId(3), &KeyBound::exact(&[1, 2, 3, 4], 1), None)
        .unwrap();
    assert!(doc.is_empty());
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// One compiler and one descriptor serve many threads.
#[test]
fn test_parallel_compilations() {
    let index = Arc::new(single_part(TypeClass::SignedInt, 8));
    let compiler = Arc::new(RangeCompiler::default());

    let handles: Vec<_> = (0..8i64)
        .map(|n| {
            let index = Arc::clone(&index);
            let compiler = Arc::clone(&compiler);
            thread::spawn(move || {
                let key = (n * 1000).to_le_bytes();
                compiler
                    .compile(Some(index.as_ref()), &KeyBound::exact(&key, 1), None)
                    .unwrap()
                    .to_json()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), json!({"v": {"$et": n as i64 * 1000}}));
    }
}
