//! Note entity.

use super::NoteDomainError;
use crate::task::domain::Attachment;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Creates a new random note identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a note identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable note content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    text: String,
    deadline: Option<DateTime<Utc>>,
    attachments: Vec<Attachment>,
}

impl NoteDraft {
    /// Creates a draft holding `text`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteDomainError::EmptyText`] when the text is blank.
    pub fn new(text: impl Into<String>) -> Result<Self, NoteDomainError> {
        let raw = text.into();
        if raw.trim().is_empty() {
            return Err(NoteDomainError::EmptyText);
        }
        Ok(Self {
            text: raw,
            deadline: None,
            attachments: Vec::new(),
        })
    }

    /// Sets the optional deadline.
    #[must_use]
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Replaces the attachment list.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }
}

/// A free-form note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    id: NoteId,
    text: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    attachments: Vec<Attachment>,
}

impl Note {
    /// Creates a note stamped with the current time.
    #[must_use]
    pub fn new(draft: NoteDraft, clock: &impl Clock) -> Self {
        Self {
            id: NoteId::new(),
            text: draft.text,
            created_at: clock.utc(),
            deadline: draft.deadline,
            attachments: draft.attachments,
        }
    }

    /// Replaces the editable content, keeping identifier and creation time.
    pub fn revise(&mut self, draft: NoteDraft) {
        self.text = draft.text;
        self.deadline = draft.deadline;
        self.attachments = draft.attachments;
    }

    /// Returns the note identifier.
    #[must_use]
    pub const fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the attachments in insertion order.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }
}
