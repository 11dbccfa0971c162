//! Row data held in a materialized result
//!
//! This module provides:
//! - [`Value`], the tagged representation of one stored cell
//! - [`ResultRow`], an ordered sequence of values aligned with the table's columns

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// A stored value for one row/column cell.
///
/// The query engine may store a cell natively (`Int32`, `Boolean`), as text
/// that still needs coercion, or as an array. Typed access goes through
/// [`crate::coerce::coerce`] and [`crate::types::FromValue`].
///
/// # Example
///
/// ```rust
/// use engine_reader::Value;
///
/// fn describe(value: &Value) -> String {
///     match value {
///         Value::Null => "NULL".to_string(),
///         Value::Text(s) => format!("text {}", s),
///         Value::Int32(i) => format!("int {}", i),
///         other => other.type_name().to_string(),
///     }
/// }
/// assert_eq!(describe(&Value::Int32(7)), "int 7");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// NULL value
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// Unsigned 8-bit integer
    Byte(u8),
    /// Signed 16-bit integer
    Int16(i16),
    /// Signed 32-bit integer
    Int32(i32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Single precision float
    Float(f32),
    /// Double precision float
    Double(f64),
    /// Exact decimal
    Decimal(BigDecimal),
    /// Unique identifier
    Guid(Uuid),
    /// Date and time
    DateTime(NaiveDateTime),
    /// Text
    Text(String),
    /// Single character
    Char(char),
    /// Byte array (binary, blob)
    Bytes(Vec<u8>),
    /// Character array
    Chars(Vec<char>),
}

impl Value {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the runtime type this value carries
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Byte(_) => "Byte",
            Value::Int16(_) => "Int16",
            Value::Int32(_) => "Int32",
            Value::Int64(_) => "Int64",
            Value::Float(_) => "Single",
            Value::Double(_) => "Double",
            Value::Decimal(_) => "Decimal",
            Value::Guid(_) => "Guid",
            Value::DateTime(_) => "DateTime",
            Value::Text(_) => "String",
            Value::Char(_) => "Char",
            Value::Bytes(_) => "Byte[]",
            Value::Chars(_) => "Char[]",
        }
    }

    /// Integer payload widened to i64, for any integer width
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Byte(v) => Some(i64::from(*v)),
            Value::Int16(v) => Some(i64::from(*v)),
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<BigDecimal> for Value {
    fn from(v: BigDecimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Vec<char>> for Value {
    fn from(v: Vec<char>) -> Self {
        Value::Chars(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Guid(g) => write!(f, "{}", g),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            Value::Text(s) => write!(f, "{}", s),
            Value::Char(c) => write!(f, "{}", c),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::Chars(c) => write!(f, "<{} chars>", c.len()),
        }
    }
}

/// One row of a result table.
///
/// Values are index-aligned with the owning table's columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultRow {
    values: Vec<Value>,
}

impl ResultRow {
    /// Create a new row with values
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Get the number of values in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a value by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get all values as a slice
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Null indicator for a value. Missing trailing values count as NULL.
    pub fn is_null(&self, index: usize) -> bool {
        self.get(index).map(Value::is_null).unwrap_or(true)
    }
}

impl<V: Into<Value>> FromIterator<V> for ResultRow {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let v = Value::Null;
        assert!(v.is_null());
        assert!(v.as_str().is_none());
        assert_eq!(v.type_name(), "Null");
    }

    #[test]
    fn test_as_integer_widens() {
        assert_eq!(Value::Byte(7).as_integer(), Some(7));
        assert_eq!(Value::Int16(-3).as_integer(), Some(-3));
        assert_eq!(Value::Int32(1).as_integer(), Some(1));
        assert_eq!(Value::Int64(i64::MAX).as_integer(), Some(i64::MAX));
        assert_eq!(Value::Double(1.0).as_integer(), None);
        assert_eq!(Value::Text("1".into()).as_integer(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(Some(5i32)), Value::Int32(5));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_row_null_indicator() {
        let row: ResultRow = vec![Value::Int32(1), Value::Null].into_iter().collect();
        assert_eq!(row.len(), 2);
        assert!(!row.is_null(0));
        assert!(row.is_null(1));
        assert!(row.is_null(2));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Null), "NULL");
        assert_eq!(format!("{}", Value::Int32(42)), "42");
        assert_eq!(format!("{}", Value::Text("test".into())), "test");
        assert_eq!(format!("{}", Value::Boolean(true)), "true");
        assert_eq!(format!("{}", Value::Bytes(vec![1, 2, 3])), "<3 bytes>");
        assert_eq!(format!("{}", Value::Chars(vec!['a'])), "<1 chars>");
    }
}
