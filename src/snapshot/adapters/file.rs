//! Filesystem snapshot adapter.
//!
//! Each key maps to `<key>.json` inside a capability-scoped directory.
//! Writes go to `<key>.json.tmp` first and are renamed into place, so a
//! crash mid-write leaves the previous snapshot intact.

use std::io::ErrorKind;
use std::sync::Arc;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::snapshot::ports::{SnapshotResult, SnapshotStore};

/// Snapshot store writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: Arc<Dir>,
    key: String,
}

impl FileSnapshotStore {
    /// Opens the snapshot directory at `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::snapshot::SnapshotError::Io`] when the directory
    /// cannot be created or opened.
    pub fn open(path: &Utf8Path, key: impl Into<String>) -> SnapshotResult<Self> {
        debug!(%path, "opening snapshot directory");
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(dir),
            key: key.into(),
        })
    }

    /// Returns a store sharing this directory but addressing another key.
    #[must_use]
    pub fn for_key(&self, key: impl Into<String>) -> Self {
        Self {
            dir: Arc::clone(&self.dir),
            key: key.into(),
        }
    }

    /// Returns the key this store reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the file name backing this store, relative to its directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.key)
    }

    fn temp_file_name(&self) -> String {
        format!("{}.json.tmp", self.key)
    }
}

impl<T> SnapshotStore<T> for FileSnapshotStore
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> SnapshotResult<Option<Vec<T>>> {
        let file_name = self.file_name();
        let contents = match self.dir.read_to_string(&file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(file = %file_name, "snapshot file not found");
                return Ok(None);
            }
            Err(err) => {
                warn!(file = %file_name, error = %err, "failed to read snapshot file");
                return Err(err.into());
            }
        };

        let records: Vec<T> = serde_json::from_str(&contents).map_err(|err| {
            warn!(file = %file_name, error = %err, "failed to parse snapshot file");
            err
        })?;
        debug!(file = %file_name, records = records.len(), "loaded snapshot");
        Ok(Some(records))
    }

    fn save(&self, records: &[T]) -> SnapshotResult<()> {
        let file_name = self.file_name();
        let temp_name = self.temp_file_name();
        let encoded = serde_json::to_string_pretty(records)?;

        self.dir.write(&temp_name, encoded)?;
        self.dir.rename(&temp_name, &self.dir, &file_name)?;
        debug!(file = %file_name, records = records.len(), "saved snapshot");
        Ok(())
    }
}
