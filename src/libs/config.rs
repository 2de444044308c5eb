//! Runtime configuration for task-cli.
//!
//! The only setting is where the task file lives. It is resolved in this
//! order:
//!
//! 1. the `--file` command-line flag;
//! 2. the `TASK_CLI_FILE` environment variable (a `.env` file in the working
//!    directory is loaded by `main` before resolution);
//! 3. `tasks.json` in the current working directory.
//!
//! ```rust,no_run
//! use task_cli::libs::config::Config;
//!
//! let config = Config::resolve(None);
//! let storage = config.storage();
//! ```

use super::data_storage::DataStorage;
use crate::db::storage::Storage;
use std::env;
use std::path::PathBuf;

/// Environment variable overriding the task file location.
pub const FILE_ENV_VAR: &str = "TASK_CLI_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON file holding the task collection.
    pub storage_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: DataStorage::new().tasks_path(),
        }
    }
}

impl Config {
    /// Resolves the configuration from an optional CLI override and the
    /// environment.
    pub fn resolve(file_override: Option<PathBuf>) -> Config {
        Self::resolve_with(file_override, env::var(FILE_ENV_VAR).ok())
    }

    fn resolve_with(file_override: Option<PathBuf>, env_value: Option<String>) -> Config {
        let from_env = env_value.filter(|value| !value.trim().is_empty()).map(PathBuf::from);

        match file_override.or(from_env) {
            Some(storage_path) => Config { storage_path },
            None => Config::default(),
        }
    }

    /// Storage gateway for the configured file.
    pub fn storage(&self) -> Storage {
        Storage::new(self.storage_path.clone())
    }
}
