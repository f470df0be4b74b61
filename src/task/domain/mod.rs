//! Domain model for assignment tracking.
//!
//! The task domain covers the shape and validity rules of a trackable
//! assignment, its board status, and deadline urgency. It holds no
//! persistence or presentation concerns.

mod attachment;
mod deadline;
mod error;
mod ids;
mod status;
mod task;

pub use attachment::Attachment;
pub use deadline::{DEFAULT_UPCOMING_WINDOW_DAYS, DeadlineClass, DeadlineClassifier};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{Task, TaskDraft};
