//! Error types for note validation.

use thiserror::Error;

/// Errors returned while constructing notes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteDomainError {
    /// The note text is empty after trimming.
    #[error("note text must not be empty")]
    EmptyText,
}
