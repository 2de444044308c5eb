//! Error taxonomy for the task storage and query engine.
//!
//! Every fallible core operation returns [`TaskError`]. The variants split
//! caller mistakes (`Validation`) from problems with the backing file
//! (`StorageIo`, `StorageCorrupt`). A lookup that finds nothing is not an
//! error: repository methods return `Option` or `bool` for that case.
//!
//! The command layer converts these into `anyhow::Error` with `?` and leaves
//! the final wording and exit code to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure raised by the storage gateway or the task repository.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Invalid input: empty title, unparseable due date, unknown priority
    /// or filter value. Raised before any storage access.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The backing file could not be read, written, or created.
    #[error("Cannot access task storage at {}: {source}", path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a valid task collection.
    /// Never repaired automatically.
    #[error("Task storage at {} is corrupt: {source}", path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TaskError {
    pub fn validation(reason: impl Into<String>) -> Self {
        TaskError::Validation(reason.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::StorageIo { path: path.into(), source }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        TaskError::StorageCorrupt { path: path.into(), source }
    }
}
