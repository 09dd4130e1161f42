//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ImageStore` - Read-only access to the image rows in the relational store
//! - `ReportRenderer` - Turns a report request into a finalized document buffer

mod image_store;
mod report_renderer;

pub use image_store::{DataAccessError, ImageStore};
pub use report_renderer::{RenderError, RenderedReport, ReportRenderer};
