//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] tabstash_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] tabstash_session::SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
