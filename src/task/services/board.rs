//! Kanban board projection.

use crate::task::domain::{Task, TaskStatus};

/// One status column and the tasks it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    status: TaskStatus,
    tasks: Vec<&'a Task>,
}

impl<'a> BoardColumn<'a> {
    /// Returns the column status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.status.title()
    }

    /// Returns the column's tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[&'a Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Read-only partition of a task collection into the three board columns.
///
/// Columns appear in [`TaskStatus::ALL`] order. Every task lands in exactly
/// one column, and each column preserves the collection's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<'a> {
    columns: [BoardColumn<'a>; 3],
}

impl<'a> Board<'a> {
    /// Projects `tasks` onto the board.
    #[must_use]
    pub fn project(tasks: &'a [Task]) -> Self {
        let columns = TaskStatus::ALL.map(|status| BoardColumn {
            status,
            tasks: tasks.iter().filter(|task| task.status() == status).collect(),
        });
        Self { columns }
    }

    /// Returns the columns in board order.
    #[must_use]
    pub const fn columns(&self) -> &[BoardColumn<'a>] {
        &self.columns
    }

    /// Returns the column for `status`.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> Option<&BoardColumn<'a>> {
        self.columns.iter().find(|column| column.status == status)
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.iter().map(BoardColumn::len).sum()
    }

    /// Returns `true` when every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(BoardColumn::is_empty)
    }
}
