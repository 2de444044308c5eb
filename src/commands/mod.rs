pub mod add;
pub mod complete;
pub mod delete;
pub mod filter;
pub mod list;
pub mod search;
pub mod show;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Search tasks by title, description or category")]
    Search(search::SearchArgs),
    #[command(about = "Filter tasks by status, priority or category")]
    Filter(filter::FilterArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(name = "task-cli", author, version, about = "A simple CLI app for managing tasks", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Path of the task file (overrides TASK_CLI_FILE)
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::resolve(cli.file);
        msg_debug!(Message::StorageLocation(config.storage_path.display().to_string()));

        match cli.command {
            Commands::Add(args) => add::cmd(args, &config),
            Commands::List => list::cmd(&config),
            Commands::Show(args) => show::cmd(args, &config),
            Commands::Search(args) => search::cmd(args, &config),
            Commands::Filter(args) => filter::cmd(args, &config),
            Commands::Complete(args) => complete::cmd(args, &config),
            Commands::Delete(args) => delete::cmd(args, &config),
        }
    }
}
