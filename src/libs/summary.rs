use crate::libs::task::Task;

/// Completion counts for a list of tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub trait SummaryCalculator {
    fn summarize(&self) -> TaskSummary;
}

impl SummaryCalculator for [Task] {
    fn summarize(&self) -> TaskSummary {
        let completed = self.iter().filter(|t| t.completed).count();

        TaskSummary {
            total: self.len(),
            completed,
            pending: self.len() - completed,
        }
    }
}
