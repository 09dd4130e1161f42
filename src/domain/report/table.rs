//! Tabular query results.
//!
//! A `TabularResult` is an ordered set of named columns plus the rows
//! produced by one aggregation call. It is created fresh per query, owned
//! by the caller, and never mutated after creation. The renderer treats
//! column order as a contract, so the order here is the order on paper.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

/// Shape violations in a tabular result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("row {row} has {actual} values but the result has {expected} columns")]
    RowArity {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),
}

/// An ordered set of named columns and positionally aligned rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularResult {
    /// Column names, in presentation order.
    pub columns: Vec<String>,
    /// Data rows; each row is positionally aligned with `columns`.
    pub rows: Vec<Vec<CellValue>>,
}

impl TabularResult {
    /// Creates a tabular result from column names and rows.
    pub fn new(
        columns: impl IntoIterator<Item = impl Into<String>>,
        rows: Vec<Vec<CellValue>>,
    ) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the result holds no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Checks the shape invariants: unique column names and every row
    /// exactly as wide as the column list.
    ///
    /// Callers that accept a `TabularResult` from outside (the renderer in
    /// particular) must reject invalid shapes rather than truncate or pad.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let mut seen = HashSet::new();
        for name in &self.columns {
            if !seen.insert(name.as_str()) {
                return Err(ShapeError::DuplicateColumn(name.clone()));
            }
        }

        let expected = self.columns.len();
        for (row, values) in self.rows.iter().enumerate() {
            if values.len() != expected {
                return Err(ShapeError::RowArity {
                    row,
                    expected,
                    actual: values.len(),
                });
            }
        }

        Ok(())
    }
}
