//! Type translation and typed value extraction
//!
//! - [`TypeTranslator`] maps a declared [`DbType`] tag to the [`FieldType`]
//!   a column is delivered as. The query engine normally owns this table;
//!   [`StandardTypeTranslator`] is the built-in mapping.
//! - [`FromValue`] performs the exact-match cast from a coerced [`Value`] to a
//!   Rust type. It never converts between representations: an `Int64` is not an
//!   `i32`, and NULL is not anything.

use std::borrow::Cow;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::constants::{DbType, FieldType};
use crate::error::{Error, Result};
use crate::row::Value;

/// Maps declared column tags to runtime field types
pub trait TypeTranslator {
    /// Runtime type for values under `db_type`
    fn translate(&self, db_type: DbType) -> FieldType;
}

/// Built-in tag to runtime type mapping
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypeTranslator;

impl TypeTranslator for StandardTypeTranslator {
    fn translate(&self, db_type: DbType) -> FieldType {
        match db_type {
            DbType::AnsiString
            | DbType::AnsiStringFixedLength
            | DbType::String
            | DbType::StringFixedLength
            | DbType::Xml => FieldType::String,
            DbType::Binary => FieldType::Bytes,
            DbType::Byte => FieldType::Byte,
            DbType::Boolean => FieldType::Boolean,
            DbType::Currency | DbType::Decimal => FieldType::Decimal,
            DbType::Date | DbType::DateTime | DbType::DateTime2 | DbType::DateTimeOffset => {
                FieldType::DateTime
            }
            DbType::Double => FieldType::Double,
            DbType::Single => FieldType::Float,
            DbType::Guid => FieldType::Guid,
            DbType::Int16 => FieldType::Int16,
            DbType::Int32 => FieldType::Int32,
            DbType::Int64 => FieldType::Int64,
            DbType::Object => FieldType::Object,
        }
    }
}

impl<F: Fn(DbType) -> FieldType> TypeTranslator for F {
    fn translate(&self, db_type: DbType) -> FieldType {
        self(db_type)
    }
}

/// Exact-match extraction of a Rust value from a coerced [`Value`]
pub trait FromValue<'a>: Sized {
    /// Extract `Self`, failing with [`Error::InvalidCast`] on any mismatch
    fn from_value(value: Cow<'a, Value>) -> Result<Self>;
}

fn invalid_cast<T>(expected: &'static str, value: &Value) -> Result<T> {
    Err(Error::InvalidCast {
        expected,
        actual: value.type_name(),
    })
}

impl<'a> FromValue<'a> for Cow<'a, Value> {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        Ok(value)
    }
}

impl<'a> FromValue<'a> for Value {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        Ok(value.into_owned())
    }
}

macro_rules! impl_from_value_copy {
    ($($ty:ty => $variant:ident, $name:literal;)*) => {
        $(
            impl<'a> FromValue<'a> for $ty {
                fn from_value(value: Cow<'a, Value>) -> Result<Self> {
                    match value.as_ref() {
                        Value::$variant(v) => Ok(*v),
                        other => invalid_cast($name, other),
                    }
                }
            }
        )*
    };
}

impl_from_value_copy! {
    bool => Boolean, "Boolean";
    u8 => Byte, "Byte";
    i16 => Int16, "Int16";
    i32 => Int32, "Int32";
    i64 => Int64, "Int64";
    f32 => Float, "Single";
    f64 => Double, "Double";
    Uuid => Guid, "Guid";
    NaiveDateTime => DateTime, "DateTime";
    char => Char, "Char";
}

impl<'a> FromValue<'a> for BigDecimal {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        match value {
            Cow::Borrowed(Value::Decimal(d)) => Ok(d.clone()),
            Cow::Owned(Value::Decimal(d)) => Ok(d),
            other => invalid_cast("Decimal", &other),
        }
    }
}

impl<'a> FromValue<'a> for String {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        match value {
            Cow::Borrowed(Value::Text(s)) => Ok(s.clone()),
            Cow::Owned(Value::Text(s)) => Ok(s),
            other => invalid_cast("String", &other),
        }
    }
}

impl<'a> FromValue<'a> for &'a str {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        match value {
            Cow::Borrowed(Value::Text(s)) => Ok(s.as_str()),
            other => invalid_cast("String", &other),
        }
    }
}

impl<'a> FromValue<'a> for Vec<u8> {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        match value {
            Cow::Borrowed(Value::Bytes(b)) => Ok(b.clone()),
            Cow::Owned(Value::Bytes(b)) => Ok(b),
            other => invalid_cast("Byte[]", &other),
        }
    }
}

impl<'a> FromValue<'a> for &'a [u8] {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        match value {
            Cow::Borrowed(Value::Bytes(b)) => Ok(b.as_slice()),
            other => invalid_cast("Byte[]", &other),
        }
    }
}

impl<'a> FromValue<'a> for Vec<char> {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        match value {
            Cow::Borrowed(Value::Chars(c)) => Ok(c.clone()),
            Cow::Owned(Value::Chars(c)) => Ok(c),
            other => invalid_cast("Char[]", &other),
        }
    }
}

/// NULL maps to `None`; anything else must match `T` exactly
impl<'a, T: FromValue<'a>> FromValue<'a> for Option<T> {
    fn from_value(value: Cow<'a, Value>) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}
