//! Host column types and their range-compilation class
//!
//! Integer and float columns are always indexable. Character and blob
//! columns are indexable only when they compare as text (not binary).
//! Everything else cannot take part in a compiled key range.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column types reported by the relational host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Tiny,
    Short,
    Int24,
    Long,
    LongLong,
    Float,
    Double,
    Varchar,
    String,
    VarString,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Blob,
    Decimal,
    Date,
    Time,
    DateTime,
    Timestamp,
    Year,
    Bit,
    Enum,
    Set,
    Json,
    Geometry,
}

impl ColumnType {
    /// Returns the type name used in errors and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Tiny => "tiny",
            ColumnType::Short => "short",
            ColumnType::Int24 => "int24",
            ColumnType::Long => "long",
            ColumnType::LongLong => "long_long",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Varchar => "varchar",
            ColumnType::String => "string",
            ColumnType::VarString => "var_string",
            ColumnType::TinyBlob => "tiny_blob",
            ColumnType::MediumBlob => "medium_blob",
            ColumnType::LongBlob => "long_blob",
            ColumnType::Blob => "blob",
            ColumnType::Decimal => "decimal",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::DateTime => "date_time",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Year => "year",
            ColumnType::Bit => "bit",
            ColumnType::Enum => "enum",
            ColumnType::Set => "set",
            ColumnType::Json => "json",
            ColumnType::Geometry => "geometry",
        }
    }

    /// Returns true for the fixed-width integer types
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ColumnType::Tiny
                | ColumnType::Short
                | ColumnType::Int24
                | ColumnType::Long
                | ColumnType::LongLong
        )
    }

    /// Returns true for the IEEE-754 types
    pub fn is_float(&self) -> bool {
        matches!(self, ColumnType::Float | ColumnType::Double)
    }

    /// Returns true for character and blob types
    pub fn is_character(&self) -> bool {
        matches!(
            self,
            ColumnType::Varchar
                | ColumnType::String
                | ColumnType::VarString
                | ColumnType::TinyBlob
                | ColumnType::MediumBlob
                | ColumnType::LongBlob
                | ColumnType::Blob
        )
    }

    /// Returns true if a column of this type may appear in an index
    /// definition pushed to the document store.
    pub fn is_indexable(&self, binary: bool) -> bool {
        if self.is_integer() || self.is_float() {
            return true;
        }
        self.is_character() && !binary
    }

    /// Classifies the column for range compilation
    pub fn type_class(&self, unsigned: bool, binary: bool) -> TypeClass {
        if self.is_integer() {
            if unsigned {
                TypeClass::UnsignedInt
            } else {
                TypeClass::SignedInt
            }
        } else if self.is_float() {
            TypeClass::Float
        } else if self.is_character() && !binary {
            TypeClass::Text
        } else {
            TypeClass::Unsupported
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a key part's packed bytes are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    SignedInt,
    UnsignedInt,
    Float,
    Text,
    /// Binary strings, blobs and every non-numeric, non-text type
    Unsupported,
}

impl TypeClass {
    /// Returns true for the three numeric classes
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TypeClass::SignedInt | TypeClass::UnsignedInt | TypeClass::Float
        )
    }
}
