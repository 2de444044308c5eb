//! Display implementation for task-cli messages.
//!
//! All user-facing text lives here so commands only pick a [`Message`]
//! variant and the `msg_*` macros decide where it goes.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Message::TaskCreated => "Task added successfully!".to_string(),
            Message::TaskCompleted => "Task marked as completed!".to_string(),
            Message::TaskDeleted => "Task deleted successfully!".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Task with ID \"{}\" not found.", id),
            Message::TaskId(id) => format!("ID: {}", id),
            Message::TaskTitle(title) => format!("Title: {}", title),
            Message::TaskDescription(description) => format!("Description: {}", description),
            Message::TasksHeader => "📋 Your Tasks:".to_string(),
            Message::TasksNotFound => "📋 No tasks found. Add some tasks to get started!".to_string(),
            Message::TasksNotFoundForQuery(query) => format!("No tasks match \"{}\".", query),
            Message::TasksNotFoundForFilter(filter) => format!("No tasks match filter {}.", filter),
            Message::SearchResultsHeader(query) => format!("🔍 Tasks matching \"{}\":", query),
            Message::FilterResultsHeader(filter) => format!("🔍 Tasks with {}:", filter),
            Message::StorageLocation(path) => format!("Using task storage at {}", path),
            Message::CommandFailed(error) => error.to_string(),
        };
        write!(f, "{}", text)
    }
}
