//! Flow composition - report request to a linear element flow.
//!
//! First stage of the rendering pipeline. The request is validated and
//! flattened into a flow of elements (title, timestamp line, headings,
//! tables, placeholder sentences) that the pagination stage places onto
//! pages. Everything here is pure and independent of the PDF backend,
//! which keeps the document structure testable without parsing PDF bytes.

use chrono::{DateTime, Utc};

use crate::domain::report::{ReportRequest, ReportSection};
use crate::ports::RenderError;

use super::paginate::PageMetrics;

/// Sentence rendered in place of a table when a section has no rows.
pub const NO_DATA_PLACEHOLDER: &str = "No data was found for this section.";

pub const TITLE_FONT_PT: f64 = 18.0;
pub const HEADING_FONT_PT: f64 = 14.0;
pub const BODY_FONT_PT: f64 = 10.0;

/// Height of one table row in millimeters.
pub const ROW_HEIGHT_MM: f64 = 9.0;
/// Horizontal padding inside a cell, each side.
pub const CELL_PADDING_MM: f64 = 3.0;
/// Columns never shrink below this, padding included.
pub const MIN_COL_WIDTH_MM: f64 = 20.0;

const PT_TO_MM: f64 = 0.352_778;
/// Average glyph advance as a fraction of the font size (Helvetica-ish).
const AVG_GLYPH_EM: f64 = 0.5;

/// Estimated width of a text run in millimeters.
///
/// Built-in PDF fonts expose no metrics through the backend, so column
/// sizing and centering work from an average glyph width. Tables size
/// columns generously enough that the estimate only has to be in the
/// right neighborhood.
pub fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * AVG_GLYPH_EM * PT_TO_MM
}

/// One element of the linear document flow, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowElement {
    Title(String),
    Heading(String),
    Text(String),
    /// Vertical gap in millimeters.
    Spacer(f64),
    Table(TableFlow),
}

/// A table ready for placement: resolved column widths and stringified
/// rows, the header row first.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFlow {
    /// Column widths in millimeters, presentation order.
    pub col_widths: Vec<f64>,
    /// Header row first, then data rows in aggregator order.
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub header: bool,
}

impl TableFlow {
    /// Total table width in millimeters.
    pub fn width(&self) -> f64 {
        self.col_widths.iter().sum()
    }
}

/// Flattens a report request into a flow of elements.
///
/// The generation timestamp is a parameter rather than a clock read so
/// composition stays deterministic under test; the renderer passes
/// `Utc::now()` captured at render time.
pub fn compose(
    request: &ReportRequest,
    generated_at: DateTime<Utc>,
    metrics: &PageMetrics,
) -> Result<Vec<FlowElement>, RenderError> {
    if request.sections.is_empty() {
        return Err(RenderError::NoSections);
    }
    for section in &request.sections {
        section.table.validate()?;
    }

    let mut elements = vec![
        FlowElement::Title(request.title.clone()),
        FlowElement::Spacer(4.0),
        FlowElement::Text(format!(
            "Generated at: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )),
        FlowElement::Spacer(8.0),
    ];

    for (idx, section) in request.sections.iter().enumerate() {
        if idx > 0 {
            elements.push(FlowElement::Spacer(8.0));
        }
        if let Some(heading) = &section.heading {
            elements.push(FlowElement::Heading(heading.clone()));
            elements.push(FlowElement::Spacer(4.0));
        }
        if section.table.is_empty() {
            elements.push(FlowElement::Text(NO_DATA_PLACEHOLDER.to_string()));
        } else {
            elements.push(FlowElement::Table(layout_table(section, metrics)));
        }
    }

    Ok(elements)
}

/// Sizes columns from their widest cell and stringifies all rows.
fn layout_table(section: &ReportSection, metrics: &PageMetrics) -> TableFlow {
    let table = &section.table;

    let mut rows = Vec::with_capacity(table.rows.len() + 1);
    rows.push(TableRow {
        cells: table.columns.clone(),
        header: true,
    });
    for row in &table.rows {
        rows.push(TableRow {
            cells: row.iter().map(|cell| cell.to_string()).collect(),
            header: false,
        });
    }

    let mut col_widths: Vec<f64> = (0..table.columns.len())
        .map(|col| {
            let widest = rows
                .iter()
                .map(|row| text_width_mm(&row.cells[col], BODY_FONT_PT))
                .fold(0.0, f64::max);
            (widest + 2.0 * CELL_PADDING_MM).max(MIN_COL_WIDTH_MM)
        })
        .collect();

    // Scale down proportionally when the natural width overflows the page.
    let total: f64 = col_widths.iter().sum();
    let content_width = metrics.content_width();
    if total > content_width {
        let scale = content_width / total;
        for width in &mut col_widths {
            *width *= scale;
        }
    }

    TableFlow { col_widths, rows }
}
