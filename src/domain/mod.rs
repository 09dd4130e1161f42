//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `activity` - Image activity records and pure aggregation functions
//! - `report` - Tabular results, report requests, and table styling

pub mod activity;
pub mod report;
