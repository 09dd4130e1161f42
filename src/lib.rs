//! Image Reports - PDF activity reporting over an image library database
//!
//! Two components used in sequence: the activity aggregator shapes
//! read-only queries into tabular results, and the report renderer lays
//! those tables into a paginated PDF with one shared style. Callers hand
//! in an already-connected store handle and get a finalized byte buffer
//! back; connection lifecycle and transport live outside this crate.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
