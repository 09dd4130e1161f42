//! In-memory implementation of ImageStore.
//!
//! Serves a fixed set of records, or fails on demand to exercise the
//! error path. Used by handler tests and the integration suite; no
//! database required.

use async_trait::async_trait;

use crate::domain::activity::ImageRecord;
use crate::ports::{DataAccessError, ImageStore};

/// In-memory image store backed by a fixed record list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageStore {
    records: Vec<ImageRecord>,
    fail_with: Option<String>,
}

impl InMemoryImageStore {
    /// A store that returns the given records.
    pub fn with_records(records: Vec<ImageRecord>) -> Self {
        Self {
            records,
            fail_with: None,
        }
    }

    /// A store whose handle behaves as unusable.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            fail_with: Some(reason.into()),
        }
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn fetch_image_records(&self) -> Result<Vec<ImageRecord>, DataAccessError> {
        match &self.fail_with {
            Some(reason) => Err(DataAccessError::Unavailable(reason.clone())),
            None => Ok(self.records.clone()),
        }
    }
}
