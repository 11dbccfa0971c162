//! Forward-only reader over a materialized result collection
//!
//! A [`DataReader`] walks the outcomes of a statement batch one result at a
//! time and the rows of each result one row at a time. It starts positioned on
//! the first outcome, before its first row.
//!
//! ```text
//! Positioned(t, row -1) --advance_row--> RowReady(t, r) --advance_row (no more)--> RowsExhausted(t)
//!        ^                                                                              |
//!        +-------------------------------- advance_result ------------------------------+
//!                                                          advance_result (no more) --> ResultsExhausted
//! ```
//!
//! # Example
//!
//! ```rust
//! use engine_reader::{Column, DataReader, DbType, Outcome, ResultCollection, ResultTable, Value};
//!
//! # fn main() -> engine_reader::Result<()> {
//! let table = ResultTable::new(vec![
//!     Column::new("id", DbType::Int32),
//!     Column::new("active", DbType::Boolean),
//! ])
//! .with_row(vec![Value::Int32(1), Value::Int32(1)])
//! .with_row(vec![Value::Int32(2), "false".into()]);
//! let results = ResultCollection::from(vec![Outcome::table(table)]);
//!
//! let mut reader = DataReader::new(&results);
//! while reader.advance_row()? {
//!     let id = reader.get_i32(0)?;
//!     let active: bool = reader.get_by_name("active")?;
//!     println!("{}: {}", id, active);
//! }
//! assert!(!reader.advance_result()?);
//! reader.close();
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::convert::Infallible;

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::buffer::{copy_array, ArrayElement};
use crate::coerce::coerce;
use crate::config::ReaderConfig;
use crate::constants::FieldType;
use crate::error::{Error, Result};
use crate::results::{Column, Outcome, ResultCollection, ResultTable};
use crate::row::{ResultRow, Value};
use crate::types::{FromValue, StandardTypeTranslator, TypeTranslator};

static NULL_VALUE: Value = Value::Null;

/// Current position of a reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    table: usize,
    row: Option<usize>,
}

impl Position {
    fn start() -> Self {
        Self { table: 0, row: None }
    }

    /// Index of the selected outcome
    pub fn table_index(&self) -> usize {
        self.table
    }

    /// Index of the current row, -1 before the first `advance_row`
    pub fn row_index(&self) -> i64 {
        self.row.map_or(-1, |r| r as i64)
    }
}

/// Forward-only reader over a [`ResultCollection`].
///
/// The collection is borrowed for the reader's lifetime and never copied or
/// modified; any number of readers may share one collection. A single reader
/// is not meant for concurrent use.
///
/// Every accessor fails with [`Error::CursorClosed`] after [`close`](Self::close),
/// except the unsupported operations, which always report
/// [`Error::NotSupported`].
#[derive(Debug)]
pub struct DataReader<'a, T = StandardTypeTranslator> {
    results: &'a ResultCollection,
    position: Position,
    closed: bool,
    config: ReaderConfig,
    translator: T,
}

impl<'a> DataReader<'a> {
    /// Create a reader with the default configuration
    pub fn new(results: &'a ResultCollection) -> Self {
        Self::with_config(results, ReaderConfig::default())
    }

    /// Create a reader with a custom configuration
    pub fn with_config(results: &'a ResultCollection, config: ReaderConfig) -> Self {
        Self::with_translator(results, config, StandardTypeTranslator)
    }
}

impl<'a, T: TypeTranslator> DataReader<'a, T> {
    /// Create a reader that reports field types through `translator`
    pub fn with_translator(results: &'a ResultCollection, config: ReaderConfig, translator: T) -> Self {
        Self {
            results,
            position: Position::start(),
            closed: false,
            config,
            translator,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Close the reader. Closing twice is a no-op.
    pub fn close(&mut self) {
        if !self.closed {
            tracing::trace!(
                table = self.position.table,
                row = self.position.row_index(),
                "Reader closed"
            );
        }
        self.closed = true;
    }

    /// Check if the reader is closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Get the current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::CursorClosed)
        } else {
            Ok(())
        }
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Move to the next row of the current result.
    ///
    /// Returns `false` once the rows are exhausted, and keeps returning
    /// `false` without moving further.
    pub fn advance_row(&mut self) -> Result<bool> {
        self.ensure_open()?;
        let row_count = self.outcome().map_or(0, Outcome::row_count);
        let next = self.position.row.map_or(0, |r| r + 1).min(row_count);
        self.position.row = Some(next);

        let has_row = next < row_count;
        tracing::trace!(table = self.position.table, row = next, has_row, "Advanced row");
        Ok(has_row)
    }

    /// Move to the next outcome, before its first row.
    ///
    /// Returns `false` once no outcomes remain; [`field_count`](Self::field_count)
    /// is 0 from then on.
    pub fn advance_result(&mut self) -> Result<bool> {
        self.ensure_open()?;
        let len = self.results.len();
        self.position = Position {
            table: (self.position.table + 1).min(len),
            row: None,
        };

        let has_result = self.position.table < len;
        if has_result {
            tracing::trace!(table = self.position.table, "Advanced result");
        } else {
            tracing::debug!(outcomes = len, "Result collection exhausted");
        }
        Ok(has_result)
    }

    // =========================================================================
    // Result metadata
    // =========================================================================

    /// Number of columns in the current result, 0 without one
    pub fn field_count(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(self.outcome().map_or(0, Outcome::column_count))
    }

    /// Affected-row count of the current outcome
    pub fn records_affected(&self) -> Result<i64> {
        self.ensure_open()?;
        self.outcome()
            .map(|o| o.records_affected)
            .ok_or_else(|| Error::IndexOutOfRange {
                what: "result",
                index: self.position.table as i64,
                len: self.results.len(),
            })
    }

    /// Nesting depth; readers never nest
    pub fn depth(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(0)
    }

    /// Display name of column `i`
    pub fn column_name(&self, i: usize) -> Result<&'a str> {
        self.column(i).map(Column::display_name)
    }

    /// Ordinal of the first column matching `name`
    pub fn column_ordinal(&self, name: &str) -> Result<usize> {
        self.ensure_open()?;
        self.table()
            .and_then(|t| t.column_ordinal(name))
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Runtime type of column `i`
    pub fn field_type(&self, i: usize) -> Result<FieldType> {
        let column = self.column(i)?;
        Ok(self.translator.translate(column.db_type))
    }

    /// Name of the runtime type of column `i`
    pub fn data_type_name(&self, i: usize) -> Result<&'static str> {
        self.field_type(i).map(|t| t.name())
    }

    /// Schema reflection is not offered
    pub fn schema_table(&self) -> Result<Infallible> {
        Err(Error::not_supported("schema_table"))
    }

    /// Nested readers are not offered
    pub fn nested_reader(&self, _i: usize) -> Result<Infallible> {
        Err(Error::not_supported("nested_reader"))
    }

    // =========================================================================
    // Value access
    // =========================================================================

    /// Null indicator of column `i` in the current row
    pub fn is_null(&self, i: usize) -> Result<bool> {
        self.column(i)?;
        Ok(self.current_row()?.is_null(i))
    }

    /// Value of column `i`, coerced by the column's declared tag.
    ///
    /// Borrowed from the collection unless coercion produced a new value.
    pub fn value(&self, i: usize) -> Result<Cow<'a, Value>> {
        let column = self.column(i)?;
        let stored = self.current_row()?.get(i).unwrap_or(&NULL_VALUE);
        coerce(stored, column.db_type, &self.config)
    }

    /// Value of the column named `name`
    pub fn value_by_name(&self, name: &str) -> Result<Cow<'a, Value>> {
        let i = self.column_ordinal(name)?;
        self.value(i)
    }

    /// Typed value of column `i`.
    ///
    /// Goes through the same coercion as [`value`](Self::value), then requires
    /// an exact representation match.
    pub fn get<V: FromValue<'a>>(&self, i: usize) -> Result<V> {
        V::from_value(self.value(i)?)
    }

    /// Typed value of the column named `name`
    pub fn get_by_name<V: FromValue<'a>>(&self, name: &str) -> Result<V> {
        V::from_value(self.value_by_name(name)?)
    }

    /// Get a boolean
    pub fn get_bool(&self, i: usize) -> Result<bool> {
        self.get(i)
    }

    /// Get a byte
    pub fn get_byte(&self, i: usize) -> Result<u8> {
        self.get(i)
    }

    /// Get a date/time
    pub fn get_datetime(&self, i: usize) -> Result<NaiveDateTime> {
        self.get(i)
    }

    /// Get a decimal
    pub fn get_decimal(&self, i: usize) -> Result<BigDecimal> {
        self.get(i)
    }

    /// Get a double
    pub fn get_double(&self, i: usize) -> Result<f64> {
        self.get(i)
    }

    /// Get a float
    pub fn get_float(&self, i: usize) -> Result<f32> {
        self.get(i)
    }

    /// Get a unique identifier
    pub fn get_guid(&self, i: usize) -> Result<Uuid> {
        self.get(i)
    }

    /// Get a 16-bit integer
    pub fn get_i16(&self, i: usize) -> Result<i16> {
        self.get(i)
    }

    /// Get a 32-bit integer
    pub fn get_i32(&self, i: usize) -> Result<i32> {
        self.get(i)
    }

    /// Get a 64-bit integer
    pub fn get_i64(&self, i: usize) -> Result<i64> {
        self.get(i)
    }

    /// Get text
    pub fn get_string(&self, i: usize) -> Result<String> {
        self.get(i)
    }

    /// Get a character
    pub fn get_char(&self, i: usize) -> Result<char> {
        self.get(i)
    }

    /// Fill `buffer` with the values of the current row in ordinal order.
    ///
    /// Fills `min(buffer.len(), field_count)` slots and returns that count.
    pub fn get_values(&self, buffer: &mut [Value]) -> Result<usize> {
        let count = buffer.len().min(self.field_count()?);
        for (i, slot) in buffer.iter_mut().take(count).enumerate() {
            *slot = self.value(i)?.into_owned();
        }
        Ok(count)
    }

    /// Copy part of a byte array column into `buffer`.
    ///
    /// With `buffer` set to `None`, returns the full array length instead.
    /// See [`copy_array`] for the bounds rules.
    pub fn get_bytes(
        &self,
        i: usize,
        field_offset: usize,
        buffer: Option<&mut [u8]>,
        buffer_offset: usize,
        length: usize,
    ) -> Result<usize> {
        self.copy_field(i, field_offset, buffer, buffer_offset, length)
    }

    /// Copy part of a character array column into `buffer`.
    ///
    /// Same rules as [`get_bytes`](Self::get_bytes).
    pub fn get_chars(
        &self,
        i: usize,
        field_offset: usize,
        buffer: Option<&mut [char]>,
        buffer_offset: usize,
        length: usize,
    ) -> Result<usize> {
        self.copy_field(i, field_offset, buffer, buffer_offset, length)
    }

    fn copy_field<E: ArrayElement>(
        &self,
        i: usize,
        field_offset: usize,
        buffer: Option<&mut [E]>,
        buffer_offset: usize,
        length: usize,
    ) -> Result<usize> {
        let value = self.value(i)?;
        let source = E::array_of(&value)?;
        Ok(copy_array(source, field_offset, buffer, buffer_offset, length))
    }

    // =========================================================================
    // Position lookups
    // =========================================================================

    fn outcome(&self) -> Option<&'a Outcome> {
        self.results.get(self.position.table)
    }

    fn table(&self) -> Option<&'a ResultTable> {
        self.outcome().and_then(|o| o.table.as_ref())
    }

    fn column(&self, i: usize) -> Result<&'a Column> {
        self.ensure_open()?;
        let columns = self.table().map_or(&[][..], |t| t.columns.as_slice());
        columns
            .get(i)
            .ok_or_else(|| Error::ordinal_out_of_range(i, columns.len()))
    }

    fn current_row(&self) -> Result<&'a ResultRow> {
        let rows = self.table().map_or(&[][..], |t| t.rows.as_slice());
        self.position
            .row
            .and_then(|r| rows.get(r))
            .ok_or_else(|| Error::IndexOutOfRange {
                what: "row",
                index: self.position.row_index(),
                len: rows.len(),
            })
    }
}
