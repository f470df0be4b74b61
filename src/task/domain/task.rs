//! Task entity and the validated input used to build it.

use super::{Attachment, TaskDomainError, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single trackable assignment.
///
/// Serialises to the snapshot record layout
/// `{id, title, description, status, deadline, link, attachments}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(default)]
    description: String,
    status: TaskStatus,
    deadline: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

/// Validated input for creating or replacing a task.
///
/// Everything except the identifier is required to build a [`Task`]; the
/// identifier is generated when none is supplied.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use kazera::task::domain::{Task, TaskDraft, TaskStatus};
///
/// let deadline = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
/// let draft = TaskDraft::new("Math Assignment", deadline)
///     .unwrap()
///     .with_description("Problems 1-20 from chapter 3");
/// let task = Task::from_draft(draft);
///
/// assert_eq!(task.status(), TaskStatus::Todo);
/// assert!(TaskDraft::new("   ", deadline).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    id: Option<TaskId>,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    deadline: DateTime<Utc>,
    link: Option<String>,
    attachments: Vec<Attachment>,
}

impl TaskDraft {
    /// Creates a draft with the required fields and a `todo` status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: None,
            title: TaskTitle::new(title)?,
            description: String::new(),
            status: TaskStatus::Todo,
            deadline,
            link: None,
            attachments: Vec::new(),
        })
    }

    /// Supplies the identifier instead of generating one.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the status from its storage representation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] when the value is not a
    /// board column.
    pub fn with_status_named(self, status: &str) -> Result<Self, TaskDomainError> {
        let parsed = TaskStatus::try_from(status)?;
        Ok(self.with_status(parsed))
    }

    /// Sets the link. Blank links are stored as absent.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        let raw = link.into();
        self.link = if raw.trim().is_empty() { None } else { Some(raw) };
        self
    }

    /// Replaces the attachment list.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Returns the supplied identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&TaskId> {
        self.id.as_ref()
    }
}

impl Task {
    /// Builds a task from a draft, generating an identifier if absent.
    #[must_use]
    pub fn from_draft(draft: TaskDraft) -> Self {
        let id = draft.id.unwrap_or_else(TaskId::generate);
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            deadline: draft.deadline,
            link: draft.link,
            attachments: draft.attachments,
        }
    }

    /// Returns a copy of this task with every mutable field taken from
    /// `draft`. The identifier is kept; any identifier on the draft is
    /// ignored.
    #[must_use]
    pub fn revised(&self, draft: TaskDraft) -> Self {
        Self::from_draft(draft.with_id(self.id.clone()))
    }

    /// Returns a draft pre-filled with this task's values.
    #[must_use]
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            deadline: self.deadline,
            link: self.link.clone(),
            attachments: self.attachments.clone(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the board status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the link, if any.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Returns the attachments in insertion order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Sets the board status, leaving every other field untouched.
    pub(crate) const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
