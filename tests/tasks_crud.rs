#[cfg(test)]
mod tests {
    use std::fs;
    use task_cli::db::storage::Storage;
    use task_cli::db::tasks::Tasks;
    use task_cli::libs::error::TaskError;
    use task_cli::libs::task::{NewTask, Priority};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        tasks: Tasks,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let tasks = Tasks::new(Storage::new(temp_dir.path().join("tasks.json"))).unwrap();
            TaskTestContext { _temp_dir: temp_dir, tasks }
        }
    }

    impl TaskTestContext {
        fn raw_file(&self) -> String {
            fs::read_to_string(self.tasks.storage().path()).unwrap()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_then_get_by_id(ctx: &mut TaskTestContext) {
        let task = ctx
            .tasks
            .add(
                NewTask::new("Write report")
                    .with_description("Q3 numbers")
                    .with_priority(Priority::Low)
                    .with_due_date("2030-06-15")
                    .with_category("work"),
            )
            .unwrap();

        assert!(!task.completed);
        assert!(task.completed_at.is_none());
        assert_eq!(task.priority, Priority::Low);

        let fetched = ctx.tasks.get_by_id(&task.id).unwrap().unwrap();
        assert_eq!(fetched, task);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_defaults(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.add(NewTask::new("Plain")).unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
        assert_eq!(task.category, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_generates_unique_ids(ctx: &mut TaskTestContext) {
        let mut ids = Vec::new();
        for i in 0..20 {
            ids.push(ctx.tasks.add(NewTask::new(format!("Task {}", i))).unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_rejects_empty_title_without_writing(ctx: &mut TaskTestContext) {
        ctx.tasks.add(NewTask::new("Existing")).unwrap();
        let before = ctx.raw_file();

        let err = ctx.tasks.add(NewTask::new("")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        let err = ctx.tasks.add(NewTask::new("   ")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        assert_eq!(ctx.raw_file(), before);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_rejects_bad_due_date_without_writing(ctx: &mut TaskTestContext) {
        let before = ctx.raw_file();

        let err = ctx.tasks.add(NewTask::new("Pay rent").with_due_date("31/12/2030")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        assert_eq!(ctx.raw_file(), before);
        assert!(ctx.tasks.get_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_rejects_unpadded_due_date(ctx: &mut TaskTestContext) {
        let err = ctx.tasks.add(NewTask::new("Pay rent").with_due_date("2030-1-5")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));

        let task = ctx.tasks.add(NewTask::new("Pay rent").with_due_date("2030-01-05")).unwrap();
        assert_eq!(task.due_date.unwrap().to_string(), "2030-01-05");
        assert_eq!(ctx.tasks.get_all().unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id_missing(ctx: &mut TaskTestContext) {
        ctx.tasks.add(NewTask::new("Something")).unwrap();
        assert!(ctx.tasks.get_by_id("no-such-id").unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_sets_timestamp(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.add(NewTask::new("Finish me")).unwrap();

        let completed = ctx.tasks.complete(&task.id).unwrap().unwrap();

        assert!(completed.completed);
        let completed_at = completed.completed_at.unwrap();
        assert!(completed_at >= completed.created_at);
        assert_eq!(completed.created_at, task.created_at);
        assert_eq!(ctx.tasks.get_by_id(&task.id).unwrap().unwrap(), completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_twice_refreshes_timestamp(ctx: &mut TaskTestContext) {
        let task = ctx.tasks.add(NewTask::new("Finish me")).unwrap();

        let first = ctx.tasks.complete(&task.id).unwrap().unwrap();
        let second = ctx.tasks.complete(&task.id).unwrap().unwrap();

        assert!(second.completed);
        assert!(second.completed_at.unwrap() >= first.completed_at.unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_missing_changes_nothing(ctx: &mut TaskTestContext) {
        ctx.tasks.add(NewTask::new("One")).unwrap();
        ctx.tasks.add(NewTask::new("Two")).unwrap();
        let before = ctx.raw_file();

        assert!(ctx.tasks.complete("no-such-id").unwrap().is_none());

        assert_eq!(ctx.raw_file(), before);
        assert!(ctx.tasks.get_all().unwrap().iter().all(|t| !t.completed));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_exactly_one(ctx: &mut TaskTestContext) {
        let keep = ctx.tasks.add(NewTask::new("Keep")).unwrap();
        let gone = ctx.tasks.add(NewTask::new("Drop")).unwrap();

        assert!(ctx.tasks.delete(&gone.id).unwrap());

        let remaining = ctx.tasks.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0], keep);
        assert!(ctx.tasks.get_by_id(&gone.id).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_returns_false(ctx: &mut TaskTestContext) {
        ctx.tasks.add(NewTask::new("Keep")).unwrap();
        let before = ctx.raw_file();

        assert!(!ctx.tasks.delete("no-such-id").unwrap());

        assert_eq!(ctx.raw_file(), before);
        assert_eq!(ctx.tasks.get_all().unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_corrupt_storage_propagates(ctx: &mut TaskTestContext) {
        fs::write(ctx.tasks.storage().path(), "not json at all").unwrap();

        assert!(matches!(ctx.tasks.get_all(), Err(TaskError::StorageCorrupt { .. })));
        assert!(matches!(ctx.tasks.add(NewTask::new("New")), Err(TaskError::StorageCorrupt { .. })));
        assert!(matches!(ctx.tasks.delete("x"), Err(TaskError::StorageCorrupt { .. })));
        assert_eq!(ctx.raw_file(), "not json at all");
    }
}
