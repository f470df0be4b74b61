//! File references attached to tasks and notes.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};

/// A named reference to content held by the file picker.
///
/// The reference is opaque (typically an object-store URL); binary content
/// never passes through the domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AttachmentRecord", into = "AttachmentRecord")]
pub struct Attachment {
    name: String,
    reference: String,
}

/// Wire form of [`Attachment`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct AttachmentRecord {
    name: String,
    reference: String,
}

impl TryFrom<AttachmentRecord> for Attachment {
    type Error = TaskDomainError;

    fn try_from(record: AttachmentRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.reference)
    }
}

impl From<Attachment> for AttachmentRecord {
    fn from(attachment: Attachment) -> Self {
        Self {
            name: attachment.name,
            reference: attachment.reference,
        }
    }
}

impl Attachment {
    /// Creates an attachment reference.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyAttachmentName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let raw_name = name.into();
        if raw_name.trim().is_empty() {
            return Err(TaskDomainError::EmptyAttachmentName);
        }
        Ok(Self {
            name: raw_name,
            reference: reference.into(),
        })
    }

    /// Returns the file name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the content reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}
