//! Image activity domain.
//!
//! - `record` - The raw image record fetched from the store
//! - `aggregation` - Pure group-by-derived-key aggregation functions

mod aggregation;
mod record;

pub use aggregation::{calendar_day, count_by_key, daily_counts, file_extension, file_type_summary};
pub use record::ImageRecord;
