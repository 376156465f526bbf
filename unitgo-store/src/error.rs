//! Store error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store file: {0}")]
    Malformed(#[from] serde_json::Error),
}
