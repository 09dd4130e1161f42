//! PDF adapters - Implementation of the report renderer port.
//!
//! The renderer is a staged pipeline:
//! 1. `flow` - validate the request and flatten it into a linear flow
//! 2. `paginate` - place the flow onto pages by content height
//! 3. `renderer` - draw the placed pages into PDF bytes via printpdf

pub mod flow;
pub mod paginate;
mod renderer;

pub use paginate::PageMetrics;
pub use renderer::PdfReportRenderer;
