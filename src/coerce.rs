//! Coercion of stored values under their declared column tag
//!
//! Only two tag families need real conversion:
//!
//! | Tag | Stored as | Result |
//! |-----|-----------|--------|
//! | `Boolean` | any integer | `true` iff non-zero |
//! | `Boolean` | text | `true`/`false` literal, case-insensitive |
//! | `Date`, `DateTime`, `DateTime2`, `DateTimeOffset` | text | parsed date/time |
//!
//! Values already in the target representation, and NULL, pass through
//! borrowed. Every other tag passes the stored value through untouched; a
//! mismatch surfaces later as [`Error::InvalidCast`] when a typed getter
//! casts it.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::config::ReaderConfig;
use crate::constants::DbType;
use crate::error::{Error, Result};
use crate::row::Value;

/// Coerce a stored value according to its column's declared tag
pub fn coerce<'a>(value: &'a Value, db_type: DbType, config: &ReaderConfig) -> Result<Cow<'a, Value>> {
    if db_type.is_boolean() {
        as_boolean(value, config)
    } else if db_type.is_date_family() {
        as_datetime(value, config)
    } else {
        Ok(Cow::Borrowed(value))
    }
}

fn as_boolean<'a>(value: &'a Value, config: &ReaderConfig) -> Result<Cow<'a, Value>> {
    match value {
        Value::Null | Value::Boolean(_) => Ok(Cow::Borrowed(value)),
        Value::Text(text) => parse_boolean(text, config).map(|b| Cow::Owned(Value::Boolean(b))),
        other => match other.as_integer() {
            Some(i) => Ok(Cow::Owned(Value::Boolean(i != 0))),
            None => Err(Error::InvalidCast {
                expected: "Boolean",
                actual: other.type_name(),
            }),
        },
    }
}

fn as_datetime<'a>(value: &'a Value, config: &ReaderConfig) -> Result<Cow<'a, Value>> {
    match value {
        Value::Null | Value::DateTime(_) => Ok(Cow::Borrowed(value)),
        Value::Text(text) => parse_datetime(text, config).map(|dt| Cow::Owned(Value::DateTime(dt))),
        other => Err(Error::InvalidCast {
            expected: "DateTime",
            actual: other.type_name(),
        }),
    }
}

/// Parse a boolean literal (`true` or `false`, any case)
pub fn parse_boolean(text: &str, config: &ReaderConfig) -> Result<bool> {
    let literal = if config.trim_text { text.trim() } else { text };
    if literal.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::ParseFailure {
            target: "Boolean",
            text: text.to_string(),
        })
    }
}

/// Parse a date/time.
///
/// RFC 3339 is tried first and normalised to UTC; then each configured
/// format, as a date/time and then as a date at midnight.
pub fn parse_datetime(text: &str, config: &ReaderConfig) -> Result<NaiveDateTime> {
    let input = if config.trim_text { text.trim() } else { text };

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_utc());
    }

    for format in &config.date_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
        if let Some(dt) = NaiveDate::parse_from_str(input, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt);
        }
    }

    Err(Error::ParseFailure {
        target: "DateTime",
        text: text.to_string(),
    })
}
