//! Page-flow engine - places flow elements onto pages.
//!
//! Second stage of the rendering pipeline. Elements are placed top to
//! bottom; whatever does not fit by content height overflows onto a new
//! page. Tables split row-wise across pages. The table composer never
//! decides page breaks itself; that is this module's job alone.

use super::flow::{FlowElement, TableFlow, ROW_HEIGHT_MM};

/// Physical page dimensions and margins, in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetrics {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PageMetrics {
    /// US letter, the page size the reports are laid out for.
    pub fn letter() -> Self {
        Self {
            width: 215.9,
            height: 279.4,
            margin: 20.0,
        }
    }

    /// Horizontal space available to content.
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Vertical space available to content.
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }
}

/// An element placed on a page, `y` measured from the page top.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedElement {
    pub y: f64,
    pub element: FlowElement,
}

/// One laid-out page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    pub elements: Vec<PlacedElement>,
}

fn element_height(element: &FlowElement) -> f64 {
    match element {
        FlowElement::Title(_) => 12.0,
        FlowElement::Heading(_) => 9.0,
        FlowElement::Text(_) => 6.0,
        FlowElement::Spacer(h) => *h,
        FlowElement::Table(table) => table.rows.len() as f64 * ROW_HEIGHT_MM,
    }
}

/// Places elements onto as many pages as their heights require.
pub fn paginate(elements: Vec<FlowElement>, metrics: &PageMetrics) -> Vec<PageLayout> {
    let bottom = metrics.height - metrics.margin;
    let mut pages = Vec::new();
    let mut page = PageLayout::default();
    let mut cursor = metrics.margin;

    let mut flush = |page: &mut PageLayout, cursor: &mut f64, pages: &mut Vec<PageLayout>| {
        pages.push(std::mem::take(page));
        *cursor = metrics.margin;
    };

    for element in elements {
        match element {
            FlowElement::Spacer(h) => {
                // A spacer never forces a break; it is dropped at a page
                // boundary instead of carrying whitespace over.
                if cursor + h > bottom {
                    if !page.elements.is_empty() {
                        flush(&mut page, &mut cursor, &mut pages);
                    }
                } else {
                    cursor += h;
                }
            }
            FlowElement::Table(table) => {
                place_table(table, metrics, &mut page, &mut cursor, &mut pages);
            }
            other => {
                let h = element_height(&other);
                if cursor + h > bottom && !page.elements.is_empty() {
                    flush(&mut page, &mut cursor, &mut pages);
                }
                page.elements.push(PlacedElement { y: cursor, element: other });
                cursor += h;
            }
        }
    }

    if !page.elements.is_empty() || pages.is_empty() {
        pages.push(page);
    }
    pages
}

/// Splits a table row-wise across pages.
fn place_table(
    table: TableFlow,
    metrics: &PageMetrics,
    page: &mut PageLayout,
    cursor: &mut f64,
    pages: &mut Vec<PageLayout>,
) {
    let bottom = metrics.height - metrics.margin;
    let col_widths = table.col_widths;
    let mut remaining = table.rows;

    while !remaining.is_empty() {
        let fitting = ((bottom - *cursor) / ROW_HEIGHT_MM).floor() as usize;

        // Not even the header plus one data row fits: break first, unless
        // the page is already empty (then take what we can to guarantee
        // progress on degenerate page sizes).
        if fitting < 2.min(remaining.len()) && !page.elements.is_empty() {
            pages.push(std::mem::take(page));
            *cursor = metrics.margin;
            continue;
        }

        let take = fitting.max(1).min(remaining.len());
        let chunk: Vec<_> = remaining.drain(..take).collect();
        let height = chunk.len() as f64 * ROW_HEIGHT_MM;

        page.elements.push(PlacedElement {
            y: *cursor,
            element: FlowElement::Table(TableFlow {
                col_widths: col_widths.clone(),
                rows: chunk,
            }),
        });
        *cursor += height;

        if !remaining.is_empty() {
            pages.push(std::mem::take(page));
            *cursor = metrics.margin;
        }
    }
}
