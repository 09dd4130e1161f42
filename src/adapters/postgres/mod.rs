//! PostgreSQL adapters - sqlx-backed implementations of the store ports.

mod image_store;

pub use image_store::PostgresImageStore;
