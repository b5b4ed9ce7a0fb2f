//! Error types for journali

use crate::journal_entry::EntryId;
use thiserror::Error;

/// Failures reported by the entry store.
///
/// The frontend treats every variant as a no-op: nothing is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Entry not found: {0}")]
    NotFound(EntryId),
}

/// Startup errors outside the store.
#[derive(Debug, Error)]
pub enum JournaliError {
    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
