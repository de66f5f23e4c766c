//! Durable storage for the task collection.
//!
//! The whole collection persists as one pretty-printed JSON array under
//! the fixed key `tasks`, i.e. a single `tasks.json` file in the data
//! directory. Reads fail soft: a missing file is an empty collection,
//! and an unreadable or corrupt file is logged and treated as empty
//! rather than raised, so a damaged store never takes the application
//! down. Writes replace the entire file atomically under a lock.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::lock::{self, DEFAULT_LOCK_TIMEOUT_MS};
use crate::task::Task;

/// Fixed key the collection is stored under
pub const TASKS_KEY: &str = "tasks";

/// Storage adapter owning the location of the durable task collection
#[derive(Debug, Clone)]
pub struct TaskStore {
    data_dir: PathBuf,
}

impl TaskStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path to the data directory
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path to the stored collection
    pub fn tasks_file(&self) -> PathBuf {
        self.data_dir.join(format!("{TASKS_KEY}.json"))
    }

    /// Load the stored collection.
    ///
    /// Never fails: a missing file is an empty collection, and a file
    /// that cannot be read or parsed is logged at `warn` and treated as
    /// empty. The damaged file itself is left in place; the next save
    /// overwrites it.
    pub fn load(&self) -> Vec<Task> {
        let path = self.tasks_file();
        if !path.exists() {
            return Vec::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read task store, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to parse task store, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection with `tasks`.
    ///
    /// Serializes the full array and replaces `tasks.json` atomically
    /// while holding a lock on `tasks.json.lock`. No merge, no partial
    /// update; the last writer wins wholesale.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        lock::write_atomic_locked(self.tasks_file(), json.as_bytes(), DEFAULT_LOCK_TIMEOUT_MS)?;
        tracing::debug!(count = tasks.len(), "saved task collection");
        Ok(())
    }
}
