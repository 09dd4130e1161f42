//! Report requests.
//!
//! A `ReportRequest` exists only for the duration of one rendering call:
//! a title plus one or more sections in a fixed presentation order.

use serde::{Deserialize, Serialize};

use super::TabularResult;

/// One section of a report: an optional sub-heading and its table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Sub-heading printed above the table. Single-table reports carry
    /// no sub-heading, only the overall title.
    pub heading: Option<String>,
    pub table: TabularResult,
}

impl ReportSection {
    /// Creates a section with a heading.
    pub fn new(heading: impl Into<String>, table: TabularResult) -> Self {
        Self {
            heading: Some(heading.into()),
            table,
        }
    }

    /// Creates a section without a heading.
    pub fn untitled(table: TabularResult) -> Self {
        Self {
            heading: None,
            table,
        }
    }
}

/// A complete report request: title plus ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl ReportRequest {
    /// Creates a request from a title and sections.
    pub fn new(title: impl Into<String>, sections: Vec<ReportSection>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    /// Convenience constructor for a single-table report.
    pub fn single_table(title: impl Into<String>, table: TabularResult) -> Self {
        Self::new(title, vec![ReportSection::untitled(table)])
    }
}
