//! Runtime configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields a working configuration.
//!
//! # Examples
//!
//! ```
//! use kazera::config::KazeraConfig;
//!
//! let config = KazeraConfig::from_json_str(r#"{ "upcoming_window_days": 14 }"#).unwrap();
//! assert_eq!(config.upcoming_window_days, 14);
//! assert_eq!(config.task_snapshot_key, "kazera-tasks");
//! ```

use crate::task::domain::{DEFAULT_UPCOMING_WINDOW_DAYS, DeadlineClassifier};
use crate::task::services::DEFAULT_DEADLINE_LIMIT;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default snapshot key for the task collection.
pub const DEFAULT_TASK_SNAPSHOT_KEY: &str = "kazera-tasks";

/// Default snapshot key for the note collection.
pub const DEFAULT_NOTE_SNAPSHOT_KEY: &str = "notes";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration path has no file name component.
    #[error("configuration path '{0}' must name a file")]
    MissingFileName(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`KazeraConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for the task and note stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KazeraConfig {
    /// Days after today that still count as an upcoming deadline.
    pub upcoming_window_days: u32,
    /// Maximum number of approaching deadlines listed on the dashboard.
    pub dashboard_deadline_limit: usize,
    /// Snapshot key holding the task collection.
    pub task_snapshot_key: String,
    /// Snapshot key holding the note collection.
    pub note_snapshot_key: String,
}

impl Default for KazeraConfig {
    fn default() -> Self {
        Self {
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            dashboard_deadline_limit: DEFAULT_DEADLINE_LIMIT,
            task_snapshot_key: DEFAULT_TASK_SNAPSHOT_KEY.to_owned(),
            note_snapshot_key: DEFAULT_NOTE_SNAPSHOT_KEY.to_owned(),
        }
    }
}

impl KazeraConfig {
    /// Parses configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Reads configuration from the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path names no file, the file cannot
    /// be read, or its contents do not parse.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::MissingFileName(path.to_string()))?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        let contents = dir.read_to_string(file_name)?;
        debug!(%path, "loaded configuration");
        Self::from_json_str(&contents)
    }

    /// Builds the deadline classifier for the configured window.
    #[must_use]
    pub const fn classifier(&self) -> DeadlineClassifier {
        DeadlineClassifier::new(self.upcoming_window_days)
    }
}
