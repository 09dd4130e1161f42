//! Report domain types.
//!
//! - `table` - Tabular query results with shape validation
//! - `request` - Report requests and sections
//! - `style` - The shared table style applied to every rendered table

mod request;
mod style;
mod table;

pub use request::{ReportRequest, ReportSection};
pub use style::{Alignment, Shade, TableStyle};
pub use table::{CellValue, ShapeError, TabularResult};
