//! Task domain types.
//!
//! Holds the persisted [`Task`] record, its [`Priority`], the on-disk
//! container [`TaskStorage`], creation input [`NewTask`], and query
//! criteria [`TaskFilter`] / [`FilterKind`].
//!
//! ## Usage
//!
//! ```rust
//! use task_cli::libs::task::{NewTask, Priority};
//!
//! let input = NewTask::new("Buy milk")
//!     .with_priority(Priority::High)
//!     .with_due_date("2099-01-01");
//! ```

use super::error::TaskError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Textual form used for due dates, both on input and on disk.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Ordinal task priority. Declaration order gives `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        write!(f, "{}", text)
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TaskError::validation(format!("Unknown priority '{}', expected low, medium or high", other))),
        }
    }
}

/// A single trackable unit of work.
///
/// `completed_at` is present exactly when `completed` is true; only
/// [`Task::mark_completed`] flips the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Marks the task completed at `now`.
    ///
    /// Calling this on an already completed task refreshes `completed_at`.
    pub fn mark_completed(&mut self, now: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(now);
    }

    /// Case-insensitive substring match over title, description and category.
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(needle);

        contains(&self.title) || self.description.as_deref().is_some_and(contains) || self.category.as_deref().is_some_and(contains)
    }

    /// Default listing order: priority descending, then tasks with a due date
    /// (earliest first) before those without, then creation time ascending.
    pub fn listing_order(a: &Task, b: &Task) -> Ordering {
        b.priority
            .cmp(&a.priority)
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(left), Some(right)) => left.cmp(&right),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| a.created_at.cmp(&b.created_at))
    }
}

/// Serialized container for the whole task collection.
///
/// Unknown top-level keys are ignored on read so the file can grow
/// metadata later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStorage {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskStorage {
    /// Checks the record-level invariants a parsed file must hold: unique
    /// ids, non-blank titles, and `completedAt` present exactly when
    /// `completed` is true. Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = HashSet::new();

        for task in &self.tasks {
            if !seen.insert(task.id.as_str()) {
                return Err(format!("duplicate task id '{}'", task.id));
            }
            if task.title.trim().is_empty() {
                return Err(format!("task '{}' has an empty title", task.id));
            }
            match (task.completed, task.completed_at.is_some()) {
                (true, false) => return Err(format!("task '{}' is completed but has no completedAt", task.id)),
                (false, true) => return Err(format!("task '{}' is pending but has a completedAt", task.id)),
                _ => {}
            }
        }

        Ok(())
    }
}

/// Input for creating a task. Fields are raw user text; validation happens
/// in [`NewTask::validate`].
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub category: Option<String>,
}

/// Validated creation fields, ready to become a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Trims text fields, rejects a blank title and parses the due date.
    pub fn validate(&self) -> Result<ValidTask, TaskError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskError::validation("Task title cannot be empty"));
        }

        let due_date = self.due_date.as_deref().map(parse_due_date).transpose()?;

        Ok(ValidTask {
            title: title.to_string(),
            description: non_blank(self.description.as_deref()),
            priority: self.priority,
            due_date,
            category: non_blank(self.category.as_deref()),
        })
    }
}

/// Parses a zero-padded `YYYY-MM-DD` due date. Unpadded forms such as
/// `2024-1-5` are rejected even though chrono would accept them.
pub fn parse_due_date(text: &str) -> Result<NaiveDate, TaskError> {
    let invalid = || TaskError::validation(format!("Invalid due date '{}', expected YYYY-MM-DD", text));
    let trimmed = text.trim();

    let well_formed = trimmed.len() == 10
        && trimmed
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).map_err(|_| invalid())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|text| !text.is_empty()).map(str::to_string)
}

/// Filter criteria with AND semantics. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    /// Exact match, not substring.
    pub category: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.completed.is_none_or(|completed| task.completed == completed)
            && self.priority.is_none_or(|priority| task.priority == priority)
            && self.category.as_deref().is_none_or(|category| task.category.as_deref() == Some(category))
    }

    /// Builds a single-criterion filter from a kind and its textual value.
    pub fn from_kind(kind: FilterKind, value: &str) -> Result<Self, TaskError> {
        let filter = match kind {
            FilterKind::Status => TaskFilter {
                completed: Some(parse_status(value)?),
                ..Default::default()
            },
            FilterKind::Priority => TaskFilter {
                priority: Some(value.parse()?),
                ..Default::default()
            },
            FilterKind::Category => TaskFilter {
                category: Some(value.to_string()),
                ..Default::default()
            },
        };

        Ok(filter)
    }
}

fn parse_status(value: &str) -> Result<bool, TaskError> {
    match value.trim().to_lowercase().as_str() {
        "completed" | "done" => Ok(true),
        "pending" | "todo" => Ok(false),
        other => Err(TaskError::validation(format!("Unknown status '{}', expected completed or pending", other))),
    }
}

/// Which attribute a single-criterion filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterKind {
    Status,
    Priority,
    Category,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FilterKind::Status => "status",
            FilterKind::Priority => "priority",
            FilterKind::Category => "category",
        };
        write!(f, "{}", text)
    }
}
