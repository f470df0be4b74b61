//! Note board: sole owner of the note collection.

use crate::note::domain::{Note, NoteDomainError, NoteDraft, NoteId};
use crate::snapshot::{SnapshotError, SnapshotStore};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by note board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteBoardError {
    /// Input was rejected before reaching the collection.
    #[error(transparent)]
    Validation(#[from] NoteDomainError),

    /// No note with the identifier exists.
    #[error("note not found: {0}")]
    NotFound(NoteId),
}

/// Result type for note board operations.
pub type NoteBoardResult<T> = Result<T, NoteBoardError>;

/// In-memory note collection with best-effort snapshot persistence.
///
/// Persistence follows [`crate::task::services::TaskStore`]: every mutation
/// saves the whole collection and write failures are logged, not returned.
/// An unreadable snapshot is left untouched until
/// [`Self::overwrite_unreadable_snapshot`] is called.
#[derive(Debug)]
pub struct NoteBoard<S, C>
where
    S: SnapshotStore<Note>,
    C: Clock,
{
    notes: Vec<Note>,
    snapshot: S,
    clock: C,
    load_error: Option<SnapshotError>,
    save_error: Option<SnapshotError>,
}

impl<S, C> NoteBoard<S, C>
where
    S: SnapshotStore<Note>,
    C: Clock,
{
    /// Opens a board, seeding the collection from `snapshot`.
    #[must_use]
    pub fn open(snapshot: S, clock: C) -> Self {
        let (notes, load_error) = match snapshot.load() {
            Ok(loaded) => (loaded.unwrap_or_default(), None),
            Err(err) => {
                warn!(error = %err, "failed to load note snapshot, starting empty");
                (Vec::new(), Some(err))
            }
        };
        debug!(notes = notes.len(), "opened note board");

        Self {
            notes,
            snapshot,
            clock,
            load_error,
            save_error: None,
        }
    }

    /// Returns every note in insertion order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the note with `id`, if present.
    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    /// Returns the snapshot collaborator.
    #[must_use]
    pub const fn snapshot(&self) -> &S {
        &self.snapshot
    }

    /// Returns the most recent snapshot failure. Load failures persist until
    /// the snapshot is explicitly overwritten.
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

    /// Replaces an unreadable snapshot with the current notes, returning the
    /// discarded load failure.
    pub fn overwrite_unreadable_snapshot(&mut self) -> Option<SnapshotError> {
        let discarded = self.load_error.take()?;
        warn!(error = %discarded, notes = self.notes.len(), "overwriting unreadable note snapshot");
        self.persist();
        Some(discarded)
    }

    /// Appends a note built from `draft`, stamped with the current time.
    pub fn add(&mut self, draft: NoteDraft) -> Note {
        let note = Note::new(draft, &self.clock);
        debug!(note_id = %note.id(), "adding note");
        self.notes.push(note.clone());
        self.persist();
        note
    }

    /// Replaces the content of the note with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NoteBoardError::NotFound`] when no note has that identifier.
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> NoteBoardResult<Note> {
        let slot = self
            .notes
            .iter_mut()
            .find(|note| note.id() == id)
            .ok_or(NoteBoardError::NotFound(id))?;
        slot.revise(draft);
        let updated = slot.clone();
        debug!(note_id = %id, "updated note");
        self.persist();
        Ok(updated)
    }

    /// Removes the note with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`NoteBoardError::NotFound`] when no note has that identifier.
    pub fn delete(&mut self, id: NoteId) -> NoteBoardResult<Note> {
        let position = self
            .notes
            .iter()
            .position(|note| note.id() == id)
            .ok_or(NoteBoardError::NotFound(id))?;
        let removed = self.notes.remove(position);
        debug!(note_id = %id, "deleted note");
        self.persist();
        Ok(removed)
    }

    fn persist(&mut self) {
        if self.load_error.is_some() {
            warn!(notes = self.notes.len(), "note snapshot unreadable, keeping changes in memory");
            return;
        }
        match self.snapshot.save(&self.notes) {
            Ok(()) => self.save_error = None,
            Err(err) => {
                warn!(error = %err, notes = self.notes.len(), "failed to save note snapshot");
                self.save_error = Some(err);
            }
        }
    }
}
