//! GenerateTableReportHandler - single-table convenience entry point.
//!
//! Wraps one tabular result and a title into a request for the generic
//! rendering contract. No rules of its own beyond that composition.

use std::sync::Arc;

use crate::domain::report::{ReportRequest, TabularResult};
use crate::ports::{RenderedReport, ReportRenderer};

use super::ReportError;

/// Command for a single-table report.
#[derive(Debug, Clone)]
pub struct GenerateTableReportCommand {
    pub title: String,
    pub table: TabularResult,
}

/// Handler for single-table reports.
pub struct GenerateTableReportHandler {
    renderer: Arc<dyn ReportRenderer>,
}

impl GenerateTableReportHandler {
    pub fn new(renderer: Arc<dyn ReportRenderer>) -> Self {
        Self { renderer }
    }

    /// Renders one table under the given title.
    pub fn handle(&self, command: GenerateTableReportCommand) -> Result<RenderedReport, ReportError> {
        let request = ReportRequest::single_table(command.title, command.table);
        let report = self.renderer.render(&request)?;
        tracing::info!(
            filename = %report.filename,
            bytes = report.content.len(),
            "generated single-table report"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::PdfReportRenderer;
    use crate::domain::report::CellValue;

    fn handler() -> GenerateTableReportHandler {
        GenerateTableReportHandler::new(Arc::new(PdfReportRenderer::new()))
    }

    #[test]
    fn renders_a_single_table_report() {
        let table = TabularResult::new(
            ["file_type", "total"],
            vec![
                vec![CellValue::from("png"), CellValue::Integer(10)],
                vec![CellValue::from("jpg"), CellValue::Integer(4)],
            ],
        );

        let report = handler()
            .handle(GenerateTableReportCommand {
                title: "Summary".to_string(),
                table,
            })
            .unwrap();

        assert!(report.content.starts_with(b"%PDF"));
        assert_eq!(report.filename, "summary.pdf");
    }

    #[test]
    fn empty_table_renders_placeholder_report() {
        let report = handler()
            .handle(GenerateTableReportCommand {
                title: "Empty Report".to_string(),
                table: TabularResult::new(["a", "b", "c"], vec![]),
            })
            .unwrap();

        assert!(!report.content.is_empty());
        assert!(report.content.starts_with(b"%PDF"));
    }

    #[test]
    fn invalid_shape_fails_without_a_buffer() {
        let table = TabularResult::new(["a", "b"], vec![vec![CellValue::Integer(1)]]);
        let result = handler().handle(GenerateTableReportCommand {
            title: "Bad".to_string(),
            table,
        });
        assert!(matches!(result, Err(ReportError::Render(_))));
    }
}
