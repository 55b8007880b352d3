//! Error types for the bookplayer core.
//!
//! The player's transport surface deliberately has no error channel (a
//! dropped operation is logged, not returned), so the taxonomy here covers
//! the places that can actually fail: catalog lookups and invalid domain
//! values.

use thiserror::Error;

/// Errors produced by the core domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A book index outside the catalog
    #[error("no book at index {index} (catalog holds {len})")]
    BookNotFound { index: usize, len: usize },

    /// A chapter index outside a book's chapter list
    #[error("no chapter at index {index} (book holds {len})")]
    ChapterOutOfRange { index: usize, len: usize },

    /// A domain value that failed validation
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Convenience result alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
