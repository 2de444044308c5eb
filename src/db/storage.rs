//! Storage gateway: whole-file persistence of the task collection.
//!
//! The collection lives in one pretty-printed JSON file. Every load reads the
//! whole file and every save replaces it, so there is no partial state on
//! disk. There is no locking; a single process is assumed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::db::storage::Storage;
//!
//! let storage = Storage::new("tasks.json");
//! storage.ensure_initialized()?;
//! let collection = storage.load()?;
//! storage.save(&collection)?;
//! # Ok::<(), task_cli::libs::error::TaskError>(())
//! ```

use crate::libs::error::TaskError;
use crate::libs::task::TaskStorage;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed gateway for the full task collection.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with an empty collection if it is missing.
    /// Existing files are left untouched.
    pub fn ensure_initialized(&self) -> Result<(), TaskError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
        }

        warn!(path = %self.path.display(), "task storage not found, creating an empty one");
        self.save(&TaskStorage::default())
    }

    /// Reads and parses the entire backing file, rejecting collections that
    /// break the record invariants (see [`TaskStorage::check_invariants`]).
    pub fn load(&self) -> Result<TaskStorage, TaskError> {
        let data = fs::read_to_string(&self.path).map_err(|e| TaskError::io(&self.path, e))?;
        let storage: TaskStorage = serde_json::from_str(&data).map_err(|e| TaskError::corrupt(&self.path, e))?;
        storage
            .check_invariants()
            .map_err(|reason| TaskError::corrupt(&self.path, <serde_json::Error as serde::de::Error>::custom(reason)))?;

        debug!(path = %self.path.display(), count = storage.tasks.len(), "loaded tasks");
        Ok(storage)
    }

    /// Serializes the whole collection and replaces the backing file.
    ///
    /// The content goes to a sibling temp file first and is then renamed over
    /// the target, so a failed write leaves the previous file intact.
    pub fn save(&self, storage: &TaskStorage) -> Result<(), TaskError> {
        let content = serde_json::to_string_pretty(storage).map_err(|e| TaskError::corrupt(&self.path, e))?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, content).map_err(|e| TaskError::io(&temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(TaskError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), count = storage.tasks.len(), "saved tasks");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_else(|| "tasks.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
