//! PDF renderer - draws laid-out pages with printpdf.
//!
//! Final stage of the rendering pipeline. By the time this runs the flow
//! has been validated, composed, and paginated; this stage only converts
//! placed elements into PDF drawing operations using the built-in
//! Helvetica fonts, then finalizes the byte buffer.

use chrono::Utc;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Rgb,
};

use crate::domain::report::{Alignment, ReportRequest, Shade, TableStyle};
use crate::ports::{RenderError, RenderedReport, ReportRenderer};

use super::flow::{
    self, FlowElement, TableFlow, BODY_FONT_PT, CELL_PADDING_MM, HEADING_FONT_PT, ROW_HEIGHT_MM,
    TITLE_FONT_PT,
};
use super::paginate::{self, PageLayout, PageMetrics, PlacedElement};

const PT_TO_MM: f64 = 0.352_778;

/// Renders report requests into letter-sized PDF documents.
///
/// Every table in every report is drawn with the one shared
/// [`TableStyle`]; the renderer holds no per-table styling state.
#[derive(Debug, Clone)]
pub struct PdfReportRenderer {
    style: &'static TableStyle,
    metrics: PageMetrics,
}

impl Default for PdfReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfReportRenderer {
    pub fn new() -> Self {
        Self {
            style: TableStyle::standard(),
            metrics: PageMetrics::letter(),
        }
    }

    fn draw_pages(&self, title: &str, pages: &[PageLayout]) -> Result<Vec<u8>, RenderError> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            title,
            Mm(self.metrics.width as _),
            Mm(self.metrics.height as _),
            "Layer 1",
        );

        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::layout(e.to_string()))?;
        let bold_font = doc
            .add_builtin_font(builtin_bold(self.style.header_font))
            .map_err(|e| RenderError::layout(e.to_string()))?;

        for (index, page) in pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_idx, layer_idx) = doc.add_page(
                    Mm(self.metrics.width as _),
                    Mm(self.metrics.height as _),
                    "Layer 1",
                );
                doc.get_page(page_idx).get_layer(layer_idx)
            };

            for placed in &page.elements {
                self.draw_element(&layer, placed, &body_font, &bold_font);
            }
        }

        let mut bytes: Vec<u8> = Vec::new();
        doc.save(&mut std::io::BufWriter::new(&mut bytes))
            .map_err(|e| RenderError::layout(e.to_string()))?;
        Ok(bytes)
    }

    fn draw_element(
        &self,
        layer: &PdfLayerReference,
        placed: &PlacedElement,
        body_font: &IndirectFontRef,
        bold_font: &IndirectFontRef,
    ) {
        let x = self.metrics.margin;
        match &placed.element {
            FlowElement::Title(text) => {
                self.draw_text(layer, text, TITLE_FONT_PT, x, placed.y, bold_font, Shade::BLACK);
            }
            FlowElement::Heading(text) => {
                self.draw_text(layer, text, HEADING_FONT_PT, x, placed.y, bold_font, Shade::BLACK);
            }
            FlowElement::Text(text) => {
                self.draw_text(layer, text, BODY_FONT_PT, x, placed.y, body_font, Shade::BLACK);
            }
            FlowElement::Spacer(_) => {}
            FlowElement::Table(table) => {
                self.draw_table(layer, table, placed.y, body_font, bold_font);
            }
        }
    }

    /// Draws a text run whose top edge sits at `y_top` (mm from page top).
    fn draw_text(
        &self,
        layer: &PdfLayerReference,
        text: &str,
        size_pt: f64,
        x: f64,
        y_top: f64,
        font: &IndirectFontRef,
        color: Shade,
    ) {
        let baseline = self.metrics.height - y_top - size_pt * PT_TO_MM;
        layer.set_fill_color(to_color(color));
        layer.use_text(text, size_pt as _, Mm(x as _), Mm(baseline as _), font);
    }

    fn draw_table(
        &self,
        layer: &PdfLayerReference,
        table: &TableFlow,
        y_top: f64,
        body_font: &IndirectFontRef,
        bold_font: &IndirectFontRef,
    ) {
        let style = self.style;
        let table_width = table.width();
        // Tables are centered horizontally, like the flowed-layout engine
        // the original reports were built on.
        let x0 = self.metrics.margin + (self.metrics.content_width() - table_width) / 2.0;

        // Backgrounds first, then grid, then text.
        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_top = y_top + row_idx as f64 * ROW_HEIGHT_MM;
            let shade = if row.header {
                style.header_background
            } else {
                style.body_background
            };
            layer.set_fill_color(to_color(shade));
            layer.add_polygon(rect(x0, self.from_top(row_top), table_width, ROW_HEIGHT_MM));
        }

        self.draw_grid(layer, table, x0, y_top);

        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_top = y_top + row_idx as f64 * ROW_HEIGHT_MM;
            let (font, size, color) = if row.header {
                (bold_font, BODY_FONT_PT, style.header_text)
            } else {
                (body_font, BODY_FONT_PT, Shade::BLACK)
            };

            let mut cell_x = x0;
            for (cell, width) in row.cells.iter().zip(&table.col_widths) {
                let text_width = flow::text_width_mm(cell, size);
                let x = match style.alignment {
                    Alignment::Left => cell_x + CELL_PADDING_MM,
                    Alignment::Center => cell_x + ((width - text_width) / 2.0).max(0.0),
                    Alignment::Right => cell_x + (width - text_width - CELL_PADDING_MM).max(0.0),
                };
                // Vertically center the run inside the row.
                let y = row_top + (ROW_HEIGHT_MM - size * PT_TO_MM) / 2.0;
                self.draw_text(layer, cell, size, x, y, font, color);
                cell_x += width;
            }
        }
    }

    /// Uniform grid lines around every cell.
    fn draw_grid(&self, layer: &PdfLayerReference, table: &TableFlow, x0: f64, y_top: f64) {
        let table_width = table.width();
        let table_height = table.rows.len() as f64 * ROW_HEIGHT_MM;

        layer.set_outline_color(to_color(Shade::BLACK));
        layer.set_outline_thickness(self.style.grid_weight as _);

        for row_idx in 0..=table.rows.len() {
            let y = self.from_top(y_top + row_idx as f64 * ROW_HEIGHT_MM);
            layer.add_line(horizontal_line(x0, x0 + table_width, y));
        }

        let mut x = x0;
        let y_bottom = self.from_top(y_top + table_height);
        let y_top_pdf = self.from_top(y_top);
        for width in table.col_widths.iter().chain(std::iter::once(&0.0)) {
            layer.add_line(vertical_line(x, y_bottom, y_top_pdf));
            x += width;
        }
    }

    /// Converts a from-top y coordinate to PDF's from-bottom space.
    fn from_top(&self, y: f64) -> f64 {
        self.metrics.height - y
    }
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, request: &ReportRequest) -> Result<RenderedReport, RenderError> {
        // The timestamp line reflects render time, not query time.
        let elements = flow::compose(request, Utc::now(), &self.metrics)?;
        let pages = paginate::paginate(elements, &self.metrics);

        tracing::debug!(
            title = %request.title,
            sections = request.sections.len(),
            pages = pages.len(),
            "rendering report"
        );

        let bytes = self.draw_pages(&request.title, &pages)?;
        Ok(RenderedReport::pdf(bytes, &request.title))
    }
}

fn builtin_bold(header_font: &str) -> BuiltinFont {
    match header_font {
        "Times-Bold" => BuiltinFont::TimesBold,
        "Courier-Bold" => BuiltinFont::CourierBold,
        _ => BuiltinFont::HelveticaBold,
    }
}

fn to_color(shade: Shade) -> Color {
    Color::Rgb(Rgb::new(shade.r as _, shade.g as _, shade.b as _, None))
}

/// A filled rectangle with its top-left at `(x, y_top_pdf)` in PDF space.
fn rect(x: f64, y_top_pdf: f64, width: f64, height: f64) -> Polygon {
    let ring = vec![
        (Point::new(Mm(x as _), Mm(y_top_pdf as _)), false),
        (Point::new(Mm((x + width) as _), Mm(y_top_pdf as _)), false),
        (
            Point::new(Mm((x + width) as _), Mm((y_top_pdf - height) as _)),
            false,
        ),
        (Point::new(Mm(x as _), Mm((y_top_pdf - height) as _)), false),
    ];
    Polygon {
        rings: vec![ring],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    }
}

fn horizontal_line(x0: f64, x1: f64, y: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x0 as _), Mm(y as _)), false),
            (Point::new(Mm(x1 as _), Mm(y as _)), false),
        ],
        is_closed: false,
    }
}

fn vertical_line(x: f64, y0: f64, y1: f64) -> Line {
    Line {
        points: vec![
            (Point::new(Mm(x as _), Mm(y0 as _)), false),
            (Point::new(Mm(x as _), Mm(y1 as _)), false),
        ],
        is_closed: false,
    }
}
