//! In-memory key-value snapshot adapter.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::snapshot::ports::{SnapshotError, SnapshotResult, SnapshotStore};

/// Key-value snapshot store held in process memory.
///
/// Entries are kept as serialised JSON so records go through the same
/// encoding as the filesystem adapter. Clones and [`Self::for_key`] views
/// share one underlying map, which lets a task store and a note store sit
/// side by side the way they would in browser local storage.
///
/// # Examples
///
/// ```
/// use kazera::snapshot::{SnapshotStore, adapters::MemorySnapshotStore};
///
/// let tasks = MemorySnapshotStore::new("kazera-tasks");
/// let notes = tasks.for_key("notes");
///
/// SnapshotStore::<String>::save(&notes, &["remember".to_owned()]).unwrap();
/// assert!(SnapshotStore::<String>::load(&tasks).unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MemorySnapshotStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    key: String,
}

impl MemorySnapshotStore {
    /// Creates an empty map addressed through `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            entries: Arc::default(),
            key: key.into(),
        }
    }

    /// Returns a view of the same map addressing a different key.
    #[must_use]
    pub fn for_key(&self, key: impl Into<String>) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            key: key.into(),
        }
    }

    /// Returns the key this view reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw serialised entry for this key, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Poisoned`] when the shared map is poisoned.
    pub fn raw(&self) -> SnapshotResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| SnapshotError::Poisoned)?;
        Ok(entries.get(&self.key).cloned())
    }

    /// Replaces the raw serialised entry for this key.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Poisoned`] when the shared map is poisoned.
    pub fn put_raw(&self, contents: impl Into<String>) -> SnapshotResult<()> {
        let mut entries = self.entries.write().map_err(|_| SnapshotError::Poisoned)?;
        entries.insert(self.key.clone(), contents.into());
        Ok(())
    }
}

impl<T> SnapshotStore<T> for MemorySnapshotStore
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> SnapshotResult<Option<Vec<T>>> {
        let Some(contents) = self.raw()? else {
            debug!(key = %self.key, "no snapshot stored");
            return Ok(None);
        };
        let records: Vec<T> = serde_json::from_str(&contents)?;
        debug!(key = %self.key, records = records.len(), "loaded snapshot");
        Ok(Some(records))
    }

    fn save(&self, records: &[T]) -> SnapshotResult<()> {
        let encoded = serde_json::to_string(records)?;
        self.put_raw(encoded)?;
        debug!(key = %self.key, records = records.len(), "saved snapshot");
        Ok(())
    }
}
