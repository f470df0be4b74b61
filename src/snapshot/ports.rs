//! Port contract for loading and saving collection snapshots.

use thiserror::Error;

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot persistence contract.
///
/// Implementations hold exactly one entry. Successive saves overwrite each
/// other and the last write wins.
pub trait SnapshotStore<T> {
    /// Loads the persisted collection.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the entry exists but cannot be read or
    /// decoded.
    fn load(&self) -> SnapshotResult<Option<Vec<T>>>;

    /// Replaces the persisted collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the records cannot be encoded or the
    /// entry cannot be written.
    fn save(&self, records: &[T]) -> SnapshotResult<()>;
}

/// Errors returned by snapshot adapters.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading or writing the backing storage failed.
    #[error("snapshot i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded as JSON.
    #[error("snapshot encoding error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Another user of the shared storage panicked while holding its lock.
    #[error("snapshot storage lock poisoned")]
    Poisoned,
}
