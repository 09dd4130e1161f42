//! PostgreSQL implementation of ImageStore.
//!
//! Issues a single read-only query over the `images` table. The pool is
//! handed in already connected; acquiring and releasing it is the
//! caller's concern, not this adapter's.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::activity::ImageRecord;
use crate::ports::{DataAccessError, ImageStore};

/// PostgreSQL implementation of ImageStore.
#[derive(Clone)]
pub struct PostgresImageStore {
    pool: PgPool,
}

impl PostgresImageStore {
    /// Creates a new PostgresImageStore over an already-connected pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageStore for PostgresImageStore {
    async fn fetch_image_records(&self) -> Result<Vec<ImageRecord>, DataAccessError> {
        let rows = sqlx::query(
            r#"
            SELECT filename, created_at
            FROM images
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .into_iter()
            .map(|row| {
                let filename: String = row.get("filename");
                let created_at: DateTime<Utc> = row.get("created_at");
                ImageRecord::new(filename, created_at)
            })
            .collect();

        tracing::debug!("fetched image records for aggregation");
        Ok(records)
    }
}
