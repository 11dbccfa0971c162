//! Declared column type tags and runtime type descriptors
//!
//! A [`DbType`] is the tag the query engine attaches to each column. A
//! [`FieldType`] is what a caller sees when asking which Rust value a column
//! yields; the mapping between the two lives in [`crate::types::TypeTranslator`].

use std::fmt;

/// Column type tag as declared by the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbType {
    /// Variable-length non-Unicode string
    AnsiString,
    /// Fixed-length non-Unicode string
    AnsiStringFixedLength,
    /// Variable-length binary data
    Binary,
    /// Unsigned 8-bit integer
    Byte,
    /// Boolean flag
    Boolean,
    /// Currency amount
    Currency,
    /// Date without time of day
    Date,
    /// Date and time
    DateTime,
    /// Date and time with extended range and precision
    DateTime2,
    /// Date and time with time zone offset
    DateTimeOffset,
    /// Exact decimal number
    Decimal,
    /// Double precision float
    Double,
    /// Globally unique identifier
    Guid,
    /// Signed 16-bit integer
    Int16,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Untyped value
    Object,
    /// Single precision float
    Single,
    /// Variable-length Unicode string
    String,
    /// Fixed-length Unicode string
    StringFixedLength,
    /// XML document
    Xml,
}

impl DbType {
    /// Check if values under this tag are coerced to booleans
    pub fn is_boolean(&self) -> bool {
        matches!(self, DbType::Boolean)
    }

    /// Check if values under this tag are coerced to date/time values
    pub fn is_date_family(&self) -> bool {
        matches!(
            self,
            DbType::Date | DbType::DateTime | DbType::DateTime2 | DbType::DateTimeOffset
        )
    }
}

/// Runtime type a column's values are delivered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `bool`
    Boolean,
    /// `u8`
    Byte,
    /// `i16`
    Int16,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `f32`
    Float,
    /// `f64`
    Double,
    /// `bigdecimal::BigDecimal`
    Decimal,
    /// `uuid::Uuid`
    Guid,
    /// `chrono::NaiveDateTime`
    DateTime,
    /// `String`
    String,
    /// `char`
    Char,
    /// `Vec<u8>`
    Bytes,
    /// `Vec<char>`
    Chars,
    /// Any value
    Object,
}

impl FieldType {
    /// Display name of the runtime type
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Boolean => "Boolean",
            FieldType::Byte => "Byte",
            FieldType::Int16 => "Int16",
            FieldType::Int32 => "Int32",
            FieldType::Int64 => "Int64",
            FieldType::Float => "Single",
            FieldType::Double => "Double",
            FieldType::Decimal => "Decimal",
            FieldType::Guid => "Guid",
            FieldType::DateTime => "DateTime",
            FieldType::String => "String",
            FieldType::Char => "Char",
            FieldType::Bytes => "Byte[]",
            FieldType::Chars => "Char[]",
            FieldType::Object => "Object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
