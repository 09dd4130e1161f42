//! Raw image records as fetched from the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One image row: the filename and when it was created.
///
/// This is the only input the aggregation functions need; everything else
/// (day buckets, file-type categories, counts) is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

impl ImageRecord {
    pub fn new(filename: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            filename: filename.into(),
            created_at,
        }
    }
}
