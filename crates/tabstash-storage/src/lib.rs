//! TabStash Storage Layer
//!
//! SQLite-backed key-value persistence. The session collection lives as a
//! single JSON blob under one well-known key, so every write replaces the
//! whole record atomically.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
