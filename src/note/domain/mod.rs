//! Domain model for notes.

mod error;
mod note;

pub use error::NoteDomainError;
pub use note::{Note, NoteDraft, NoteId};
