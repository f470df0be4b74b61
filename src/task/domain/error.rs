//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The attachment file name is empty after trimming.
    #[error("attachment name must not be empty")]
    EmptyAttachmentName,

    /// The status value is not one of the board columns.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
