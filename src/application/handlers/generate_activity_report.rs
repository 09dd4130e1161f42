//! GenerateActivityReportHandler - the two-table image activity report.
//!
//! Thin composition over the aggregator and the renderer: runs both
//! fixed aggregations, then renders them under the fixed section
//! headings. Carries no rendering rules of its own.

use std::sync::Arc;

use crate::application::ActivityAggregator;
use crate::domain::report::{ReportRequest, ReportSection};
use crate::ports::{ImageStore, RenderedReport, ReportRenderer};

use super::ReportError;

const REPORT_TITLE: &str = "Image Activity Report";
const DAILY_HEADING: &str = "Created per day";
const SUMMARY_HEADING: &str = "Summary by file type";

/// Handler for the image activity report.
pub struct GenerateActivityReportHandler {
    aggregator: ActivityAggregator,
    renderer: Arc<dyn ReportRenderer>,
}

impl GenerateActivityReportHandler {
    pub fn new(store: Arc<dyn ImageStore>, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            aggregator: ActivityAggregator::new(store),
            renderer,
        }
    }

    /// Generates the two-section activity report.
    pub async fn handle(&self) -> Result<RenderedReport, ReportError> {
        let daily = self.aggregator.daily_activity_counts().await?;
        let summary = self.aggregator.category_summary().await?;

        let request = ReportRequest::new(
            REPORT_TITLE,
            vec![
                ReportSection::new(DAILY_HEADING, daily),
                ReportSection::new(SUMMARY_HEADING, summary),
            ],
        );

        let report = self.renderer.render(&request)?;
        tracing::info!(
            filename = %report.filename,
            bytes = report.content.len(),
            "generated image activity report"
        );
        Ok(report)
    }
}
