//! Persisted document shape and storage location
//!
//! - **document**: JSON layout of a saved collection, keyed per variant
//! - **location**: where that document is read from and written to

pub mod document;
pub mod location;

pub use document::CodesDocument;
pub use location::StorageTarget;
