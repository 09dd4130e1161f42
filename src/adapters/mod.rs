//! Adapters - Implementations of the ports.
//!
//! - `postgres` - sqlx-backed image store
//! - `memory` - in-memory image store for tests and local runs
//! - `pdf` - printpdf-backed report renderer

pub mod memory;
pub mod pdf;
pub mod postgres;

pub use memory::InMemoryImageStore;
pub use pdf::PdfReportRenderer;
pub use postgres::PostgresImageStore;
