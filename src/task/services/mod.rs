//! Application services over the task collection.

mod board;
mod dashboard;
mod store;

pub use board::{Board, BoardColumn};
pub use dashboard::{ApproachingDeadline, DEFAULT_DEADLINE_LIMIT, DashboardSummary};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
