//! Integration tests for the report generation pipeline.
//!
//! Drives the whole path (in-memory store -> aggregator -> handlers ->
//! PDF renderer) through the public API: ordered daily counts, preserved
//! category order, all-empty sections, and the empty single-table report.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use image_reports::adapters::pdf::flow::{self, FlowElement, NO_DATA_PLACEHOLDER};
use image_reports::adapters::pdf::PageMetrics;
use image_reports::adapters::{InMemoryImageStore, PdfReportRenderer};
use image_reports::application::{
    ActivityAggregator, GenerateActivityReportHandler, GenerateTableReportCommand,
    GenerateTableReportHandler, ReportError,
};
use image_reports::domain::activity::ImageRecord;
use image_reports::domain::report::{CellValue, ReportRequest, ReportSection, TabularResult};

fn record(filename: &str, m: u32, d: u32) -> ImageRecord {
    ImageRecord::new(filename, Utc.with_ymd_and_hms(2024, m, d, 10, 0, 0).unwrap())
}

fn fixture_store() -> Arc<InMemoryImageStore> {
    Arc::new(InMemoryImageStore::with_records(vec![
        record("a.png", 1, 1),
        record("b.png", 1, 1),
        record("c.jpg", 1, 1),
        record("d.png", 1, 2),
        record("e.png", 1, 2),
        record("f.png", 1, 2),
        record("g.jpg", 1, 2),
        record("h.png", 1, 2),
    ]))
}

fn tables_in(elements: &[FlowElement]) -> Vec<&flow::TableFlow> {
    elements
        .iter()
        .filter_map(|e| match e {
            FlowElement::Table(t) => Some(t),
            _ => None,
        })
        .collect()
}

// Daily counts render header then rows in ascending day order.
#[tokio::test]
async fn daily_counts_table_renders_header_then_ordered_rows() {
    let aggregator = ActivityAggregator::new(Arc::new(InMemoryImageStore::with_records(vec![
        record("a.png", 1, 1),
        record("b.png", 1, 1),
        record("c.png", 1, 1),
        record("d.png", 1, 2),
        record("e.png", 1, 2),
        record("f.png", 1, 2),
        record("g.png", 1, 2),
        record("h.png", 1, 2),
    ])));

    let daily = aggregator.daily_activity_counts().await.unwrap();
    let request = ReportRequest::single_table("Daily", daily);
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let elements = flow::compose(&request, ts, &PageMetrics::letter()).unwrap();

    let table = tables_in(&elements)[0];
    assert_eq!(table.rows[0].cells, vec!["day", "total"]);
    assert_eq!(table.rows[1].cells, vec!["2024-01-01", "3"]);
    assert_eq!(table.rows[2].cells, vec!["2024-01-02", "5"]);
}

// The renderer never re-sorts the category summary.
#[tokio::test]
async fn category_summary_order_is_preserved_by_the_renderer() {
    let summary = TabularResult::new(
        ["file_type", "total"],
        vec![
            vec![CellValue::from("png"), CellValue::Integer(10)],
            vec![CellValue::from("jpg"), CellValue::Integer(4)],
        ],
    );
    let request = ReportRequest::single_table("Summary", summary);
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let elements = flow::compose(&request, ts, &PageMetrics::letter()).unwrap();

    let table = tables_in(&elements)[0];
    assert_eq!(table.rows[1].cells[0], "png");
    assert_eq!(table.rows[2].cells[0], "jpg");
}

// Both sections empty -> two placeholders, zero tables, and the document
// still finalizes.
#[tokio::test]
async fn empty_store_yields_two_placeholders_and_a_valid_pdf() {
    let store = Arc::new(InMemoryImageStore::default());
    let aggregator = ActivityAggregator::new(store.clone());
    let daily = aggregator.daily_activity_counts().await.unwrap();
    let summary = aggregator.category_summary().await.unwrap();

    let request = ReportRequest::new(
        "Image Activity Report",
        vec![
            ReportSection::new("Created per day", daily),
            ReportSection::new("Summary by file type", summary),
        ],
    );
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let elements = flow::compose(&request, ts, &PageMetrics::letter()).unwrap();

    assert!(tables_in(&elements).is_empty());
    let placeholders = elements
        .iter()
        .filter(|e| **e == FlowElement::Text(NO_DATA_PLACEHOLDER.to_string()))
        .count();
    assert_eq!(placeholders, 2);

    let handler =
        GenerateActivityReportHandler::new(store, Arc::new(PdfReportRenderer::new()));
    let report = handler.handle().await.unwrap();
    assert!(report.content.starts_with(b"%PDF"));
}

// A 3-column, 0-row single-table report titled "Empty Report".
#[test]
fn empty_single_table_report_produces_a_nonempty_document() {
    let handler = GenerateTableReportHandler::new(Arc::new(PdfReportRenderer::new()));
    let report = handler
        .handle(GenerateTableReportCommand {
            title: "Empty Report".to_string(),
            table: TabularResult::new(["a", "b", "c"], vec![]),
        })
        .unwrap();

    assert!(!report.content.is_empty());
    assert!(report.content.starts_with(b"%PDF"));
    assert!(report.content.ends_with(b"%%EOF") || report.content.ends_with(b"%%EOF\n"));
    assert_eq!(report.filename, "empty-report.pdf");
}

#[tokio::test]
async fn activity_report_end_to_end() {
    let handler =
        GenerateActivityReportHandler::new(fixture_store(), Arc::new(PdfReportRenderer::new()));

    let report = handler.handle().await.unwrap();
    assert!(report.content.starts_with(b"%PDF"));
    assert_eq!(report.content_type, "application/pdf");
    assert_eq!(report.filename, "image-activity-report.pdf");
}

// Idempotence: identical input composes to identical structure; only the
// render-time timestamp may differ between two live renders.
#[test]
fn identical_input_composes_identically() {
    let table = TabularResult::new(
        ["file_type", "total"],
        vec![vec![CellValue::from("png"), CellValue::Integer(2)]],
    );
    let request = ReportRequest::single_table("Summary", table);
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let first = flow::compose(&request, ts, &PageMetrics::letter()).unwrap();
    let second = flow::compose(&request, ts, &PageMetrics::letter()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn unusable_handle_fails_the_whole_report() {
    let store = Arc::new(InMemoryImageStore::unavailable("connection refused"));
    let handler =
        GenerateActivityReportHandler::new(store, Arc::new(PdfReportRenderer::new()));

    let result = handler.handle().await;
    assert!(matches!(result, Err(ReportError::DataAccess(_))));
}

#[test]
fn many_rows_flow_onto_additional_pages() {
    let rows: Vec<Vec<CellValue>> = (0..100)
        .map(|i| vec![CellValue::Text(format!("type-{}", i)), CellValue::Integer(i)])
        .collect();
    let request = ReportRequest::single_table(
        "Long Summary",
        TabularResult::new(["file_type", "total"], rows),
    );
    let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let metrics = PageMetrics::letter();

    let elements = flow::compose(&request, ts, &metrics).unwrap();
    let pages = image_reports::adapters::pdf::paginate::paginate(elements, &metrics);
    assert!(pages.len() >= 2);

    let renderer = PdfReportRenderer::new();
    let report = image_reports::ports::ReportRenderer::render(&renderer, &request).unwrap();
    assert!(report.content.starts_with(b"%PDF"));
}
