//! # task-cli
//!
//! A command-line task tracker. Tasks carry a title, optional description,
//! priority, optional due date and category, and completion state. The whole
//! collection is kept in one local JSON file that is re-read and rewritten on
//! every operation.
//!
//! ## Layout
//!
//! - [`db`]: the storage gateway and the task repository
//! - [`libs`]: domain types, errors, configuration and presentation helpers
//! - [`commands`]: the clap command tree used by the binary
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_cli::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
