use super::summary::TaskSummary;
use super::task::{Task, DUE_DATE_FORMAT};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "TITLE", "PRIORITY", "DUE", "CATEGORY"]);
        for task in tasks {
            table.add_row(row![
                Self::status_mark(task),
                task.id,
                task.title,
                task.priority,
                Self::due_date(task),
                task.category.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task_details(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["Title", task.title]);
        if let Some(description) = &task.description {
            table.add_row(row!["Description", description]);
        }
        let status = if task.completed { "completed" } else { "pending" };
        table.add_row(row!["Status", status]);
        table.add_row(row!["Priority", task.priority]);
        if task.due_date.is_some() {
            table.add_row(row!["Due", Self::due_date(task)]);
        }
        if let Some(category) = &task.category {
            table.add_row(row!["Category", category]);
        }
        table.add_row(row!["Created", task.created_at.format("%Y-%m-%d %H:%M")]);
        if let Some(completed_at) = task.completed_at {
            table.add_row(row!["Completed", completed_at.format("%Y-%m-%d %H:%M")]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summary: &TaskSummary) -> String {
        format!("📊 Total: {} | Completed: {} | Pending: {}", summary.total, summary.completed, summary.pending)
    }

    fn status_mark(task: &Task) -> &'static str {
        if task.completed {
            "✓"
        } else {
            "○"
        }
    }

    fn due_date(task: &Task) -> String {
        task.due_date.map(|d| d.format(DUE_DATE_FORMAT).to_string()).unwrap_or_default()
    }
}
