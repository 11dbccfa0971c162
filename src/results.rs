//! Materialized statement outcomes
//!
//! A batch of statements executed by the query engine produces one
//! [`Outcome`] per statement. Outcomes that returned rows carry a
//! [`ResultTable`]. The whole batch is a [`ResultCollection`], which the
//! reader borrows read-only for its lifetime.
//!
//! # Example
//!
//! ```rust
//! use engine_reader::{Column, DbType, Outcome, ResultCollection, ResultTable, Value};
//!
//! let table = ResultTable::new(vec![
//!     Column::new("id", DbType::Int32),
//!     Column::new("name", DbType::String),
//! ])
//! .with_row(vec![Value::Int32(1), "Alice".into()]);
//!
//! let results: ResultCollection = vec![Outcome::rows_affected(3), Outcome::table(table)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(results.len(), 2);
//! ```

use crate::constants::DbType;
use crate::row::{ResultRow, Value};

/// Column metadata for a result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Qualified name parts, e.g. `["dbo", "users", "id"]`
    pub name: Vec<String>,
    /// Declared type tag
    pub db_type: DbType,
}

impl Column {
    /// Create a column with a single-part name
    pub fn new(name: impl Into<String>, db_type: DbType) -> Self {
        Self {
            name: vec![name.into()],
            db_type,
        }
    }

    /// Create a column with a qualified multi-part name
    pub fn qualified<I, S>(parts: I, db_type: DbType) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: parts.into_iter().map(Into::into).collect(),
            db_type,
        }
    }

    /// Display name (last name part)
    pub fn display_name(&self) -> &str {
        self.name.last().map(String::as_str).unwrap_or("")
    }

    /// Check if `name` identifies this column, either by any single part or
    /// by the full dotted name (case-insensitive)
    pub fn matches(&self, name: &str) -> bool {
        if self.name.iter().any(|part| part.eq_ignore_ascii_case(name)) {
            return true;
        }
        self.name.len() > 1 && self.name.join(".").eq_ignore_ascii_case(name)
    }
}

/// Tabular result of one statement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    /// Column metadata
    pub columns: Vec<Column>,
    /// Rows in result order
    pub rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Create an empty table with the given columns
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of values
    pub fn with_row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(ResultRow::new(values));
        self
    }

    /// Append a row
    pub fn push_row(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a column name to its ordinal. The first matching column wins.
    pub fn column_ordinal(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.matches(name))
    }
}

/// Outcome of one executed statement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outcome {
    /// Number of rows inserted, updated or deleted
    pub records_affected: i64,
    /// Result table, if the statement returned rows
    pub table: Option<ResultTable>,
}

impl Outcome {
    /// Outcome of a statement that only affected rows
    pub fn rows_affected(count: i64) -> Self {
        Self {
            records_affected: count,
            table: None,
        }
    }

    /// Outcome of a statement that returned a table
    pub fn table(table: ResultTable) -> Self {
        Self {
            records_affected: -1,
            table: Some(table),
        }
    }

    /// Number of columns, zero without a table
    pub fn column_count(&self) -> usize {
        self.table.as_ref().map_or(0, ResultTable::column_count)
    }

    /// Number of rows, zero without a table
    pub fn row_count(&self) -> usize {
        self.table.as_ref().map_or(0, ResultTable::row_count)
    }
}

/// Ordered outcomes of a statement batch
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultCollection {
    outcomes: Vec<Outcome>,
}

impl ResultCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an outcome
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Get the number of outcomes
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if there are no outcomes
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Get an outcome by index
    pub fn get(&self, index: usize) -> Option<&Outcome> {
        self.outcomes.get(index)
    }

    /// Get an iterator over the outcomes
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter()
    }
}

impl From<Vec<Outcome>> for ResultCollection {
    fn from(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }
}

impl FromIterator<Outcome> for ResultCollection {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
