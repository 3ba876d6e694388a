//! Storage errors.

use thiserror::Error;

/// Errors raised by a [`RecordStore`](crate::RecordStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `create` targeted a key that already holds a record.
    #[error("record {key} already exists")]
    AlreadyExists { key: String },

    /// The key holds no record.
    #[error("record {key} not found")]
    NotFound { key: String },

    /// The key holds a record of a different kind than requested.
    #[error("record {key} is {found}, expected {expected}")]
    KindMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The backing store refused or failed the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether this error means the key is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
