#![warn(missing_docs)]

//! # engine-reader
//!
//! A forward-only row reader over the materialized output of an in-process
//! query engine.
//!
//! The engine executes a statement batch and produces a [`ResultCollection`]:
//! one [`Outcome`] per statement, each with an affected-row count and, for
//! queries, a [`ResultTable`]. A [`DataReader`] walks that collection with the
//! capability set of a conventional database row reader.
//!
//! ## Features
//!
//! - **Multi-result traversal** - `advance_result` / `advance_row`
//! - **Ordinal and name lookup** - case-insensitive, qualified names supported
//! - **Typed getters** - one coercion path shared with the untyped fetch
//! - **Bounded array reads** - probe-and-copy for byte and character arrays
//! - **Zero copy** - values are borrowed from the collection unless coerced
//!
//! ## Quick Start
//!
//! ```rust
//! use engine_reader::{Column, DataReader, DbType, Outcome, ResultCollection, ResultTable, Value};
//!
//! # fn main() -> engine_reader::Result<()> {
//! let users = ResultTable::new(vec![
//!     Column::new("id", DbType::Int32),
//!     Column::new("name", DbType::String),
//! ])
//! .with_row(vec![Value::Int32(1), "Alice".into()])
//! .with_row(vec![Value::Int32(2), "Bob".into()]);
//!
//! let results = ResultCollection::from(vec![
//!     Outcome::rows_affected(2),
//!     Outcome::table(users),
//! ]);
//!
//! let mut reader = DataReader::new(&results);
//! assert_eq!(reader.records_affected()?, 2);
//!
//! reader.advance_result()?;
//! while reader.advance_row()? {
//!     let id = reader.get_i32(0)?;
//!     let name: &str = reader.get_by_name("name")?;
//!     println!("User {}: {}", id, name);
//! }
//! reader.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Coercion
//!
//! | Column tag | Stored as | Delivered as |
//! |------------|-----------|--------------|
//! | `Boolean` | integer | `bool` (non-zero is `true`) |
//! | `Boolean` | text `"true"`/`"false"` | `bool` |
//! | `Date`, `DateTime`, `DateTime2`, `DateTimeOffset` | text | `chrono::NaiveDateTime` |
//! | anything else | as stored | as stored |
//!
//! Typed getters then require an exact match: `get_i32` on an `Int64` value
//! fails with [`Error::InvalidCast`].
//!
//! ## Unsupported
//!
//! Schema reflection and nested readers fail with [`Error::NotSupported`].

pub mod buffer;
pub mod coerce;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod results;
pub mod row;
pub mod types;

// Re-export commonly used types
pub use config::ReaderConfig;
pub use constants::{DbType, FieldType};
pub use cursor::{DataReader, Position};
pub use error::{Error, Result};
pub use results::{Column, Outcome, ResultCollection, ResultTable};
pub use row::{ResultRow, Value};
pub use types::{FromValue, StandardTypeTranslator, TypeTranslator};
