//! Activity aggregator - fixed aggregation queries as tabular results.
//!
//! Fetches raw image records through the store port and applies the pure
//! grouping functions from the domain. Errors from the store surface
//! unchanged; nothing here retries.

use std::sync::Arc;

use crate::domain::activity::{daily_counts, file_type_summary};
use crate::domain::report::TabularResult;
use crate::ports::{DataAccessError, ImageStore};

/// Runs the fixed aggregation queries against an image store.
#[derive(Clone)]
pub struct ActivityAggregator {
    store: Arc<dyn ImageStore>,
}

impl ActivityAggregator {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Images created per calendar day, ascending by day.
    ///
    /// Columns: `day` (date), `total` (integer).
    pub async fn daily_activity_counts(&self) -> Result<TabularResult, DataAccessError> {
        let records = self.store.fetch_image_records().await?;
        let result = daily_counts(&records);
        tracing::debug!(days = result.rows.len(), "aggregated daily activity counts");
        Ok(result)
    }

    /// Images per file type (trailing filename extension), descending by
    /// count, equal counts ordered by file type.
    ///
    /// Columns: `file_type` (string), `total` (integer).
    pub async fn category_summary(&self) -> Result<TabularResult, DataAccessError> {
        let records = self.store.fetch_image_records().await?;
        let result = file_type_summary(&records);
        tracing::debug!(categories = result.rows.len(), "aggregated category summary");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryImageStore;
    use crate::domain::activity::ImageRecord;
    use crate::domain::report::CellValue;
    use chrono::{TimeZone, Utc};

    fn record(filename: &str, day: u32) -> ImageRecord {
        ImageRecord::new(
            filename,
            Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
        )
    }

    fn aggregator(records: Vec<ImageRecord>) -> ActivityAggregator {
        ActivityAggregator::new(Arc::new(InMemoryImageStore::with_records(records)))
    }

    #[tokio::test]
    async fn daily_counts_are_grouped_and_ascending() {
        let agg = aggregator(vec![
            record("a.png", 2),
            record("b.png", 1),
            record("c.jpg", 2),
        ]);

        let result = agg.daily_activity_counts().await.unwrap();
        assert_eq!(result.columns, vec!["day", "total"]);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[0][1], CellValue::Integer(1));
        assert_eq!(result.rows[1][1], CellValue::Integer(2));
    }

    #[tokio::test]
    async fn category_summary_is_descending_by_count() {
        let agg = aggregator(vec![
            record("a.png", 1),
            record("b.png", 1),
            record("c.jpg", 2),
        ]);

        let result = agg.category_summary().await.unwrap();
        assert_eq!(result.columns, vec!["file_type", "total"]);
        assert_eq!(
            result.rows[0],
            vec![CellValue::from("png"), CellValue::Integer(2)]
        );
        assert_eq!(
            result.rows[1],
            vec![CellValue::from("jpg"), CellValue::Integer(1)]
        );
    }

    #[tokio::test]
    async fn store_failures_surface_unchanged() {
        let store = Arc::new(InMemoryImageStore::unavailable("socket closed"));
        let agg = ActivityAggregator::new(store);

        let err = agg.daily_activity_counts().await.unwrap_err();
        assert!(matches!(err, DataAccessError::Unavailable(_)));

        let agg = ActivityAggregator::new(Arc::new(InMemoryImageStore::unavailable("gone")));
        assert!(agg.category_summary().await.is_err());
    }

    #[tokio::test]
    async fn empty_store_yields_empty_but_valid_results() {
        let agg = aggregator(vec![]);
        let daily = agg.daily_activity_counts().await.unwrap();
        let summary = agg.category_summary().await.unwrap();

        assert!(daily.is_empty());
        assert!(summary.is_empty());
        assert!(daily.validate().is_ok());
        assert!(summary.validate().is_ok());
    }
}
