//! Predicate documents
//!
//! `{field: {op: literal, ...}, ...}` with fields in key order and
//! operators in emission order. Serialization preserves both orders;
//! `to_json` gives a `serde_json::Value` for comparison.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Comparison operators understood by the document engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equals
    Et,
    /// Greater or equal
    Gte,
    /// Less or equal
    Lte,
    /// Pattern match
    Regex,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Et => "$et",
            Operator::Gte => "$gte",
            Operator::Lte => "$lte",
            Operator::Regex => "$regex",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A literal compared against a field
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Native 64-bit integer
    Int(i64),
    /// IEEE-754 double (single-precision values are widened exactly)
    Double(f64),
    /// Exact decimal, used for unsigned values above `i64::MAX`
    Decimal(String),
    /// Raw string bytes; may hold NULs or trailing padding.
    ///
    /// Serialized as a JSON string with lossy UTF-8 conversion: bytes that
    /// are not valid UTF-8 (a latin1 column, say) become U+FFFD, which
    /// changes the bound. Callers needing exact non-UTF-8 bounds should
    /// read the bytes via `as_bytes` instead of the JSON form.
    Text(Vec<u8>),
}

impl Literal {
    /// Exact decimal literal for an unsigned 64-bit value
    pub fn decimal(value: u64) -> Self {
        Literal::Decimal(value.to_string())
    }

    pub fn text(bytes: impl Into<Vec<u8>>) -> Self {
        Literal::Text(bytes.into())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Literal::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Literal::Text(b) => Some(b),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Literal::Int(v) => Value::from(*v),
            Literal::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
            Literal::Decimal(digits) => Value::String(digits.clone()),
            Literal::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Literal::Int(v) => serializer.serialize_i64(*v),
            Literal::Double(v) => serializer.serialize_f64(*v),
            Literal::Decimal(digits) => serializer.serialize_str(digits),
            Literal::Text(bytes) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

/// Operators applied to one field
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldPredicate {
    ops: Vec<(Operator, Literal)>,
}

impl FieldPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operator/literal pair
    pub fn push(&mut self, op: Operator, literal: Literal) {
        self.ops.push((op, literal));
    }

    pub fn get(&self, op: Operator) -> Option<&Literal> {
        self.ops.iter().find(|(o, _)| *o == op).map(|(_, l)| l)
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Operator, Literal)> {
        self.ops.iter()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .ops
            .iter()
            .map(|(op, lit)| (op.as_str().to_string(), lit.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for FieldPredicate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ops.len()))?;
        for (op, literal) in &self.ops {
            map.serialize_entry(op.as_str(), literal)?;
        }
        map.end()
    }
}

/// Conjunction of per-field predicates
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredicateDocument {
    fields: Vec<(String, FieldPredicate)>,
}

impl PredicateDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field's predicate; empty predicates are dropped
    pub fn insert(&mut self, field: impl Into<String>, predicate: FieldPredicate) {
        if !predicate.is_empty() {
            self.fields.push((field.into(), predicate));
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldPredicate> {
        self.fields.iter().find(|(f, _)| f == field).map(|(_, p)| p)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Field names in key order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(f, _)| f.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, FieldPredicate)> {
        self.fields.iter()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(field, pred)| (field.clone(), pred.to_json()))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for PredicateDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, predicate) in &self.fields {
            map.serialize_entry(field, predicate)?;
        }
        map.end()
    }
}
