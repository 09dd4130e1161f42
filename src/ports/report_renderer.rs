//! Report renderer port - Paginated document production.

use thiserror::Error;

use crate::domain::report::{ReportRequest, ShapeError};

/// Port for rendering a report request into a finalized document buffer.
///
/// # Contract
///
/// Implementations must:
/// - Emit the title, a generation timestamp captured at render time,
///   then each section in request order
/// - Render the column-name header as the first row of every table and
///   keep data rows in the order supplied, column order unchanged
/// - Apply one shared style to every table
/// - Render a placeholder sentence for sections with zero rows
/// - Return a complete buffer or an error, never a partial document
///
/// Rendering is synchronous and CPU-bound; pagination is delegated to
/// the underlying page-flow engine.
pub trait ReportRenderer: Send + Sync {
    /// Renders the request into a finalized document.
    fn render(&self, request: &ReportRequest) -> Result<RenderedReport, RenderError>;
}

/// A finished report document, returned to the caller.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// The complete document bytes, positioned at the start.
    pub content: Vec<u8>,
    /// MIME content type of the buffer.
    pub content_type: String,
    /// Suggested filename for download or file write.
    pub filename: String,
}

impl RenderedReport {
    /// Creates a PDF report, deriving the filename from the title.
    pub fn pdf(content: Vec<u8>, title: &str) -> Self {
        Self {
            content,
            content_type: "application/pdf".to_string(),
            filename: format!("{}.pdf", slugify(title)),
        }
    }
}

fn slugify(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let trimmed = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed
    }
}

/// Errors raised while producing the document.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// A tabular result disagreed with its own column list.
    #[error("tabular result has an invalid shape: {0}")]
    Shape(#[from] ShapeError),

    /// The request carried no sections at all.
    #[error("report request must contain at least one section")]
    NoSections,

    /// The layout engine could not finalize the buffer.
    #[error("document layout failed: {0}")]
    Layout(String),
}

impl RenderError {
    /// Creates a layout failure error.
    pub fn layout(reason: impl Into<String>) -> Self {
        RenderError::Layout(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renderer_is_object_safe() {
        fn check<T: ReportRenderer + ?Sized>() {}
        check::<dyn ReportRenderer>();
    }

    #[test]
    fn pdf_reports_carry_content_type_and_filename() {
        let report = RenderedReport::pdf(vec![0x25, 0x50, 0x44, 0x46], "Image Activity Report");
        assert_eq!(report.content_type, "application/pdf");
        assert_eq!(report.filename, "image-activity-report.pdf");
        assert_eq!(report.content, b"%PDF");
    }

    #[test]
    fn slugify_collapses_punctuation_and_falls_back() {
        assert_eq!(slugify("Empty Report"), "empty-report");
        assert_eq!(slugify("A -- strange!! title"), "a-strange-title");
        assert_eq!(slugify("***"), "report");
    }

    #[test]
    fn shape_errors_convert_into_render_errors() {
        let shape = ShapeError::RowArity {
            row: 0,
            expected: 2,
            actual: 3,
        };
        let err: RenderError = shape.into();
        assert!(matches!(err, RenderError::Shape(_)));
    }
}
