//! Pure aggregation over image records.
//!
//! The store hands back raw records; everything the reports need is
//! computed here as explicit group-by-derived-key steps, so the grouping
//! logic is unit-testable with no query engine behind it.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::report::{CellValue, TabularResult};
use super::ImageRecord;

/// The calendar date of a creation timestamp (UTC).
pub fn calendar_day(created_at: &DateTime<Utc>) -> NaiveDate {
    created_at.date_naive()
}

/// The trailing segment of a filename after the last `.` separator.
///
/// A filename with no dot is its own category, and a trailing dot yields
/// the empty category. No case folding: "PNG" and "png" are distinct.
pub fn file_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[idx + 1..],
        None => filename,
    }
}

/// Counts items grouped by a derived key.
pub fn count_by_key<T, K, F>(items: &[T], key: F) -> BTreeMap<K, i64>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Images created per calendar day, ascending by day.
///
/// Columns: `day` (date), `total` (integer).
pub fn daily_counts(records: &[ImageRecord]) -> TabularResult {
    let counts = count_by_key(records, |r| calendar_day(&r.created_at));

    let rows = counts
        .into_iter()
        .map(|(day, total)| vec![CellValue::Date(day), CellValue::Integer(total)])
        .collect();

    TabularResult::new(["day", "total"], rows)
}

/// Images per file type, descending by count.
///
/// Equal counts are tie-broken ascending by file type so the output is
/// deterministic. Columns: `file_type` (string), `total` (integer).
pub fn file_type_summary(records: &[ImageRecord]) -> TabularResult {
    let counts = count_by_key(records, |r| file_extension(&r.filename).to_string());

    let mut entries: Vec<(String, i64)> = counts.into_iter().collect();
    entries.sort_by(|(a_type, a_total), (b_type, b_total)| {
        (Reverse(a_total), a_type).cmp(&(Reverse(b_total), b_type))
    });

    let rows = entries
        .into_iter()
        .map(|(file_type, total)| vec![CellValue::Text(file_type), CellValue::Integer(total)])
        .collect();

    TabularResult::new(["file_type", "total"], rows)
}
