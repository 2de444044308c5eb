//! Task repository: lifecycle and query operations over the storage gateway.
//!
//! Each call reloads the collection from disk, works on the in-memory copy,
//! and for mutations writes the whole collection back before returning.
//! Nothing is cached between calls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::db::{storage::Storage, tasks::Tasks};
//! use task_cli::libs::task::{NewTask, Priority};
//!
//! let mut tasks = Tasks::new(Storage::new("tasks.json"))?;
//! let task = tasks.add(NewTask::new("Buy milk").with_priority(Priority::High))?;
//! tasks.complete(&task.id)?;
//! # Ok::<(), task_cli::libs::error::TaskError>(())
//! ```

use super::storage::Storage;
use crate::libs::error::TaskError;
use crate::libs::task::{NewTask, Task, TaskFilter};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

pub struct Tasks {
    storage: Storage,
}

impl Tasks {
    /// Wraps `storage`, creating the backing file if it does not exist yet.
    pub fn new(storage: Storage) -> Result<Tasks, TaskError> {
        storage.ensure_initialized()?;

        Ok(Tasks { storage })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Validates `input`, appends a new pending task and persists it.
    ///
    /// Validation runs before the file is touched, so a rejected input never
    /// changes storage.
    pub fn add(&mut self, input: NewTask) -> Result<Task, TaskError> {
        let valid = input.validate()?;
        let mut collection = self.storage.load()?;

        let mut id = Uuid::new_v4().to_string();
        while collection.tasks.iter().any(|t| t.id == id) {
            id = Uuid::new_v4().to_string();
        }

        let task = Task {
            id,
            title: valid.title,
            description: valid.description,
            completed: false,
            priority: valid.priority,
            due_date: valid.due_date,
            category: valid.category,
            created_at: Utc::now(),
            completed_at: None,
        };

        collection.tasks.push(task.clone());
        self.storage.save(&collection)?;

        info!(id = %task.id, priority = %task.priority, "task added");
        Ok(task)
    }

    /// All tasks in listing order (see [`Task::listing_order`]).
    pub fn get_all(&self) -> Result<Vec<Task>, TaskError> {
        let mut tasks = self.storage.load()?.tasks;
        tasks.sort_by(Task::listing_order);

        Ok(tasks)
    }

    /// Exact id lookup. A miss is `Ok(None)`.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Task>, TaskError> {
        Ok(self.storage.load()?.tasks.into_iter().find(|t| t.id == id))
    }

    /// Marks the task completed now and persists it.
    ///
    /// Completing an already completed task refreshes `completed_at`.
    /// Returns `Ok(None)` without writing when the id is unknown.
    pub fn complete(&mut self, id: &str) -> Result<Option<Task>, TaskError> {
        let mut collection = self.storage.load()?;
        let Some(task) = collection.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        task.mark_completed(Utc::now());
        let task = task.clone();
        self.storage.save(&collection)?;

        info!(id = %task.id, "task completed");
        Ok(Some(task))
    }

    /// Removes the task with `id`. Returns whether anything was removed;
    /// storage is only rewritten when it was.
    pub fn delete(&mut self, id: &str) -> Result<bool, TaskError> {
        let mut collection = self.storage.load()?;
        let initial_len = collection.tasks.len();
        collection.tasks.retain(|t| t.id != id);

        if collection.tasks.len() == initial_len {
            return Ok(false);
        }

        self.storage.save(&collection)?;

        info!(id = %id, "task deleted");
        Ok(true)
    }

    /// Case-insensitive substring search over title, description and
    /// category. Results keep the stored order, not the listing order.
    pub fn search(&self, query: &str) -> Result<Vec<Task>, TaskError> {
        let needle = query.to_lowercase();

        Ok(self.storage.load()?.tasks.into_iter().filter(|t| t.matches_query(&needle)).collect())
    }

    /// Tasks matching every set criterion of `filter`, in stored order.
    pub fn filter(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskError> {
        Ok(self.storage.load()?.tasks.into_iter().filter(|t| filter.matches(t)).collect())
    }
}
