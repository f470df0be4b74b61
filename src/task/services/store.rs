//! Task store: sole owner of the task collection.

use crate::snapshot::{SnapshotError, SnapshotStore};
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskStatus};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by task store operations.
///
/// Persistence failures are absent: they are logged and kept in
/// [`TaskStore::last_persistence_error`] while the in-memory collection stays
/// authoritative.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// Input was rejected before reaching the collection.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task with the identifier exists.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A task with the supplied identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// In-memory task collection with best-effort snapshot persistence.
///
/// Tasks are kept in insertion order. Every successful mutation writes the
/// whole collection through the injected [`SnapshotStore`]; a failed write is
/// logged and recorded but never rolls back or fails the mutation.
///
/// A snapshot that exists but cannot be read is never overwritten. Mutations
/// stay in memory until [`Self::overwrite_unreadable_snapshot`] is called.
#[derive(Debug)]
pub struct TaskStore<S>
where
    S: SnapshotStore<Task>,
{
    tasks: Vec<Task>,
    snapshot: S,
    load_error: Option<SnapshotError>,
    save_error: Option<SnapshotError>,
}

impl<S> TaskStore<S>
where
    S: SnapshotStore<Task>,
{
    /// Opens a store, seeding the collection from `snapshot`.
    ///
    /// A missing snapshot yields an empty store. An unreadable snapshot also
    /// yields an empty store, with the failure available through
    /// [`Self::load_error`] and [`Self::last_persistence_error`], and the
    /// snapshot is left untouched by later mutations. Records repeating an
    /// earlier identifier are dropped.
    #[must_use]
    pub fn open(snapshot: S) -> Self {
        let (tasks, load_error) = match snapshot.load() {
            Ok(Some(loaded)) => (dedupe_by_id(loaded), None),
            Ok(None) => (Vec::new(), None),
            Err(err) => {
                warn!(error = %err, "failed to load task snapshot, starting empty");
                (Vec::new(), Some(err))
            }
        };
        debug!(tasks = tasks.len(), "opened task store");

        Self {
            tasks,
            snapshot,
            load_error,
            save_error: None,
        }
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the snapshot collaborator.
    #[must_use]
    pub const fn snapshot(&self) -> &S {
        &self.snapshot
    }

    /// Returns the most recent snapshot failure.
    ///
    /// A write failure is cleared by the next successful write. A load
    /// failure is reported until the snapshot is explicitly overwritten.
    #[must_use]
    pub const fn last_persistence_error(&self) -> Option<&SnapshotError> {
        match (&self.save_error, &self.load_error) {
            (Some(err), _) | (None, Some(err)) => Some(err),
            (None, None) => None,
        }
    }

    /// Returns the failure that prevented the snapshot from loading, if any.
    #[must_use]
    pub const fn load_error(&self) -> Option<&SnapshotError> {
        self.load_error.as_ref()
    }

    /// Replaces an unreadable snapshot with the current collection.
    ///
    /// Returns the load failure being discarded, or `None` when the snapshot
    /// was readable and nothing changed.
    pub fn overwrite_unreadable_snapshot(&mut self) -> Option<SnapshotError> {
        let discarded = self.load_error.take()?;
        warn!(error = %discarded, tasks = self.tasks.len(), "overwriting unreadable task snapshot");
        self.persist();
        Some(discarded)
    }

    /// Appends a task built from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the draft supplies an
    /// identifier already in use.
    pub fn add(&mut self, draft: TaskDraft) -> TaskStoreResult<Task> {
        if let Some(taken) = draft.id().filter(|id| self.get(id).is_some()) {
            return Err(TaskStoreError::DuplicateTask(taken.clone()));
        }

        let task = Task::from_draft(draft);
        debug!(task_id = %task.id(), status = %task.status(), "adding task");
        self.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    /// Replaces every field of the stored task sharing `task`'s identifier.
    ///
    /// The task keeps its position in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has that identifier.
    pub fn update(&mut self, task: Task) -> TaskStoreResult<Task> {
        let slot = self.slot_mut(task.id())?;
        slot.clone_from(&task);
        debug!(task_id = %task.id(), "updated task");
        self.persist();
        Ok(task)
    }

    /// Removes the task with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has that identifier.
    pub fn delete(&mut self, id: &TaskId) -> TaskStoreResult<Task> {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        let removed = self.tasks.remove(position);
        debug!(task_id = %id, "deleted task");
        self.persist();
        Ok(removed)
    }

    /// Moves the task with `id` to `status`, leaving other fields untouched.
    ///
    /// Moving a task to the column it already occupies succeeds without a
    /// snapshot write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has that identifier.
    pub fn move_task(&mut self, id: &TaskId, status: TaskStatus) -> TaskStoreResult<Task> {
        let slot = self.slot_mut(id)?;
        if slot.status() == status {
            return Ok(slot.clone());
        }

        slot.set_status(status);
        let moved = slot.clone();
        debug!(task_id = %id, %status, "moved task");
        self.persist();
        Ok(moved)
    }

    /// Moves the task with `id` to the column named `status`.
    ///
    /// This is the entry point for drop events, which carry the column
    /// identifier as text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when `status` is not a board
    /// column (the task is left unchanged), or [`TaskStoreError::NotFound`]
    /// when no task has that identifier.
    pub fn move_task_named(&mut self, id: &TaskId, status: &str) -> TaskStoreResult<Task> {
        let parsed = TaskStatus::try_from(status).map_err(TaskDomainError::from)?;
        self.move_task(id, parsed)
    }

    fn slot_mut(&mut self, id: &TaskId) -> TaskStoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))
    }

    fn persist(&mut self) {
        if self.load_error.is_some() {
            warn!(tasks = self.tasks.len(), "task snapshot unreadable, keeping changes in memory");
            return;
        }
        match self.snapshot.save(&self.tasks) {
            Ok(()) => self.save_error = None,
            Err(err) => {
                warn!(error = %err, tasks = self.tasks.len(), "failed to save task snapshot");
                self.save_error = Some(err);
            }
        }
    }
}

fn dedupe_by_id(loaded: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(loaded.len());
    loaded
        .into_iter()
        .filter(|task| {
            let first = seen.insert(task.id().clone());
            if !first {
                warn!(task_id = %task.id(), "dropping duplicate task from snapshot");
            }
            first
        })
        .collect()
}
