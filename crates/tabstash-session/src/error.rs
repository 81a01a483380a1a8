//! Session error types
//!
//! A missing session is not an error: lookups return `Ok(None)` and
//! deletions of unknown ids are no-ops.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabstash_storage::StorageError),

    #[error("Session name cannot be empty")]
    EmptyName,
}
