//! In-memory adapters - Fixture implementations for tests and local use.

mod image_store;

pub use image_store::InMemoryImageStore;
