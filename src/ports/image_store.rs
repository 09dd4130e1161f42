//! Image store port - Read-only access to image rows.

use async_trait::async_trait;

use crate::domain::activity::ImageRecord;

/// Read-only port over the relational store's image rows.
///
/// # Contract
///
/// Implementations must:
/// - Be handed an already-connected handle; this port does not manage
///   connection lifecycle (acquire-before-call, release-after-call is
///   the caller's responsibility)
/// - Issue read queries only; no mutation of the store
/// - Fail fast with `DataAccessError` when the handle is unusable;
///   no internal retries
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Fetches every image record (filename plus creation timestamp).
    async fn fetch_image_records(&self) -> Result<Vec<ImageRecord>, DataAccessError>;
}

/// Errors raised when the store cannot be read.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataAccessError {
    /// The handle is closed or the store is unreachable.
    #[error("store handle is unusable: {0}")]
    Unavailable(String),

    /// A query failed; carries the underlying cause.
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for DataAccessError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
                DataAccessError::Unavailable(err.to_string())
            }
            other => DataAccessError::Database(other.to_string()),
        }
    }
}
