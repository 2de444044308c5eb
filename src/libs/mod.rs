//! Domain types and ambient services for task-cli.
//!
//! ## Features
//!
//! - **Domain**: tasks, priorities, creation input, filter criteria
//! - **Errors**: the `TaskError` taxonomy shared by storage and repository
//! - **Configuration**: task file location from flag, environment or default
//! - **Presentation**: typed messages, output macros, table views, summaries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::db::tasks::Tasks;
//! use task_cli::libs::config::Config;
//! use task_cli::libs::task::NewTask;
//!
//! let mut tasks = Tasks::new(Config::resolve(None).storage())?;
//! tasks.add(NewTask::new("Implement feature").with_description("Add user authentication"))?;
//! # Ok::<(), task_cli::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod summary;
pub mod task;
pub mod view;
