//! Typed value decoding
//!
//! Reads one key part's value out of the packed key bytes and appends an
//! operator/literal pair to a field predicate. Each (class, width) pair
//! maps to one `ValueCodec` with fixed little-endian layout; widths with
//! no codec decode to nothing.
//!
//! A value is read only when its presence bit is set and, for nullable
//! parts, the leading indicator byte is zero. Anything else contributes
//! nothing and is not an error.

use crate::index::{KeyPartDescriptor, TypeClass};

use super::document::{FieldPredicate, Literal, Operator};

/// Widest fixed-width value the numeric decoders accept
pub const NUMERIC_SCRATCH_BYTES: usize = 8;

/// Fixed-width numeric layouts, all little-endian
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCodec {
    I8,
    I16,
    /// 3-byte signed, sign-extended from bit 23
    I24,
    I32,
    I64,
    U8,
    U16,
    /// 3-byte unsigned, zero-extended
    U24,
    U32,
    /// Values above `i64::MAX` decode to an exact decimal
    U64,
    F32,
    F64,
}

impl ValueCodec {
    /// Selects the codec for a numeric class and value width
    pub fn for_part(class: TypeClass, value_length: usize) -> Option<Self> {
        if value_length > NUMERIC_SCRATCH_BYTES {
            return None;
        }
        let codec = match (class, value_length) {
            (TypeClass::SignedInt, 1) => ValueCodec::I8,
            (TypeClass::SignedInt, 2) => ValueCodec::I16,
            (TypeClass::SignedInt, 3) => ValueCodec::I24,
            (TypeClass::SignedInt, 4) => ValueCodec::I32,
            (TypeClass::SignedInt, 8) => ValueCodec::I64,
            (TypeClass::UnsignedInt, 1) => ValueCodec::U8,
            (TypeClass::UnsignedInt, 2) => ValueCodec::U16,
            (TypeClass::UnsignedInt, 3) => ValueCodec::U24,
            (TypeClass::UnsignedInt, 4) => ValueCodec::U32,
            (TypeClass::UnsignedInt, 8) => ValueCodec::U64,
            (TypeClass::Float, 4) => ValueCodec::F32,
            (TypeClass::Float, 8) => ValueCodec::F64,
            _ => return None,
        };
        Some(codec)
    }

    pub fn width(&self) -> usize {
        match self {
            ValueCodec::I8 | ValueCodec::U8 => 1,
            ValueCodec::I16 | ValueCodec::U16 => 2,
            ValueCodec::I24 | ValueCodec::U24 => 3,
            ValueCodec::I32 | ValueCodec::U32 | ValueCodec::F32 => 4,
            ValueCodec::I64 | ValueCodec::U64 | ValueCodec::F64 => 8,
        }
    }

    /// Decodes exactly `width()` bytes
    pub fn decode(&self, bytes: &[u8]) -> Option<Literal> {
        let bytes = bytes.get(..self.width())?;
        let literal = match self {
            ValueCodec::I8 => Literal::Int(i64::from(i8::from_le_bytes(bytes.try_into().ok()?))),
            ValueCodec::I16 => Literal::Int(i64::from(i16::from_le_bytes(bytes.try_into().ok()?))),
            ValueCodec::I24 => {
                let extension = if bytes[2] & 0x80 != 0 { 0xFF } else { 0x00 };
                let word = [bytes[0], bytes[1], bytes[2], extension];
                Literal::Int(i64::from(i32::from_le_bytes(word)))
            }
            ValueCodec::I32 => Literal::Int(i64::from(i32::from_le_bytes(bytes.try_into().ok()?))),
            ValueCodec::I64 => Literal::Int(i64::from_le_bytes(bytes.try_into().ok()?)),
            ValueCodec::U8 => Literal::Int(i64::from(bytes[0])),
            ValueCodec::U16 => Literal::Int(i64::from(u16::from_le_bytes(bytes.try_into().ok()?))),
            ValueCodec::U24 => {
                let word = [bytes[0], bytes[1], bytes[2], 0];
                Literal::Int(i64::from(u32::from_le_bytes(word)))
            }
            ValueCodec::U32 => Literal::Int(i64::from(u32::from_le_bytes(bytes.try_into().ok()?))),
            ValueCodec::U64 => {
                let value = u64::from_le_bytes(bytes.try_into().ok()?);
                match i64::try_from(value) {
                    Ok(v) => Literal::Int(v),
                    Err(_) => Literal::decimal(value),
                }
            }
            ValueCodec::F32 => {
                Literal::Double(f64::from(f32::from_le_bytes(bytes.try_into().ok()?)))
            }
            ValueCodec::F64 => Literal::Double(f64::from_le_bytes(bytes.try_into().ok()?)),
        };
        Some(literal)
    }
}

/// Returns the value bytes of the part stored at the start of `key`.
///
/// `None` when the part is not bound, is NULL, or the key is too short
/// to hold the part's stored region.
pub fn stored_value<'a>(key: &'a [u8], part: &KeyPartDescriptor, bound: bool) -> Option<&'a [u8]> {
    if !bound {
        return None;
    }
    if part.nullable && key.first() != Some(&0) {
        return None;
    }
    value_region(key, part)
}

/// The value bytes of the part at the start of `key`, ignoring the
/// presence bit and the null indicator
pub fn value_region<'a>(key: &'a [u8], part: &KeyPartDescriptor) -> Option<&'a [u8]> {
    key.get(..part.store_length)?.get(part.value_offset()..)
}

/// Decodes a numeric part (signed, unsigned or float) and appends it
pub fn append_numeric(
    builder: &mut FieldPredicate,
    key: &[u8],
    part: &KeyPartDescriptor,
    bound: bool,
    op: Operator,
) {
    let Some(codec) = ValueCodec::for_part(part.type_class, part.value_length) else {
        return;
    };
    let Some(value) = stored_value(key, part, bound) else {
        return;
    };
    if let Some(literal) = codec.decode(value) {
        builder.push(op, literal);
    }
}

/// Appends the first `length` bytes of `value` as a text literal.
///
/// The bytes are taken as-is: no terminator is assumed and embedded
/// NULs or spaces are kept.
pub fn append_text(builder: &mut FieldPredicate, value: Option<&[u8]>, length: usize, op: Operator) {
    if let Some(bytes) = value.and_then(|v| v.get(..length)) {
        builder.push(op, Literal::text(bytes));
    }
}
