use std::env;
use std::path::PathBuf;

pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Resolves where the task file lives by default: `tasks.json` in the
/// working directory.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    pub fn tasks_path(&self) -> PathBuf {
        self.get_path(TASKS_FILE_NAME)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
