//! Report generation handlers.

mod generate_activity_report;
mod generate_table_report;

pub use generate_activity_report::GenerateActivityReportHandler;
pub use generate_table_report::{GenerateTableReportCommand, GenerateTableReportHandler};

use thiserror::Error;

use crate::ports::{DataAccessError, RenderError};

/// Errors surfaced by report generation: either the store could not be
/// read or the document could not be finalized. No partial document is
/// ever returned alongside an error.
#[derive(Debug, Clone, Error)]
pub enum ReportError {
    #[error(transparent)]
    DataAccess(#[from] DataAccessError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
