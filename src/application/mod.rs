//! Application layer - the aggregator and the report handlers.
//!
//! This layer orchestrates the ports: the aggregator shapes store rows
//! into tabular results, and the handlers compose those results into
//! report requests for the renderer.

mod aggregator;
pub mod handlers;

pub use aggregator::ActivityAggregator;
pub use handlers::{
    GenerateActivityReportHandler, GenerateTableReportCommand, GenerateTableReportHandler,
    ReportError,
};
