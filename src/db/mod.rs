//! Persistence layer for task-cli.
//!
//! The whole task collection lives in a single JSON file. [`storage`] reads
//! and replaces that file as one unit; [`tasks`] implements task lifecycle
//! and query operations on top of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::db::{storage::Storage, tasks::Tasks};
//! use task_cli::libs::task::NewTask;
//!
//! let mut tasks = Tasks::new(Storage::new("tasks.json"))?;
//! tasks.add(NewTask::new("Review code").with_category("work"))?;
//! # Ok::<(), task_cli::libs::error::TaskError>(())
//! ```

/// Whole-file load and save of the task collection.
pub mod storage;

/// Task lifecycle (add, complete, delete) and queries (list, search, filter).
pub mod tasks;
