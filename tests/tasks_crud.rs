#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;
    use tasktrack::db::tasks::Tasks;
    use tasktrack::libs::error::TaskError;
    use tasktrack::libs::projection::{sorted, SortDirection, SortKey};
    use tasktrack::libs::task::{TaskPatch, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TaskTestContext {
        fn store(&self) -> Tasks {
            Tasks::open(self.temp_dir.path().join("tasks.db")).unwrap()
        }
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            TaskTestContext { temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_and_get_roundtrip(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.create("  Buy milk  ", Some("  Two liters, lactose free  ")).unwrap();
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description, "Two liters, lactose free");
        assert_eq!(created.status, TaskStatus::Incomplete);
        assert_eq!(created.created_at, created.updated_at);

        let fetched = tasks.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_without_description(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.create("Water the plants", None).unwrap();
        assert_eq!(created.description, "");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_increase_and_are_never_reused(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let first = tasks.create("First", None).unwrap();
        let second = tasks.create("Second", None).unwrap();
        assert!(second.id > first.id);

        // Deleting the newest task must not free its id for reuse
        tasks.delete(second.id).unwrap();
        let third = tasks.create("Third", None).unwrap();
        assert!(third.id > second.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_missing_task(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        assert!(matches!(tasks.get(42), Err(TaskError::NotFound(42))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_fields(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.create("Original title", Some("Original description")).unwrap();
        sleep(Duration::from_millis(10));

        let patch = TaskPatch {
            title: Some("Updated title".to_string()),
            description: Some("Updated description".to_string()),
            status: None,
        };
        let updated = tasks.update(created.id, &patch).unwrap();

        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.description, "Updated description");
        assert_eq!(updated.status, TaskStatus::Incomplete);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        // The stored record matches what update returned
        assert_eq!(tasks.get(created.id).unwrap(), updated);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_status_only(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.create("Finish the report", Some("Quarterly numbers")).unwrap();
        sleep(Duration::from_millis(10));

        let patch = TaskPatch {
            status: Some(TaskStatus::Complete),
            ..Default::default()
        };
        let updated = tasks.update(created.id, &patch).unwrap();

        assert_eq!(updated.status, TaskStatus::Complete);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let patch = TaskPatch {
            title: Some("Anything".to_string()),
            ..Default::default()
        };
        assert!(matches!(tasks.update(7, &patch), Err(TaskError::NotFound(7))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_patch_changes_nothing(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.create("Stable task", None).unwrap();
        sleep(Duration::from_millis(10));

        let unchanged = tasks.update(created.id, &TaskPatch::default()).unwrap();
        assert_eq!(unchanged, created);
        assert_eq!(tasks.get(created.id).unwrap(), created);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_is_idempotent_in_outcome(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.create("Short-lived task", None).unwrap();
        tasks.delete(created.id).unwrap();

        assert!(matches!(tasks.get(created.id), Err(TaskError::NotFound(_))));
        assert!(matches!(tasks.delete(created.id), Err(TaskError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_returns_all_in_id_order(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        for i in 1..=5 {
            tasks.create(&format!("Task {}", i), None).unwrap();
        }

        let all = tasks.fetch().unwrap();
        assert_eq!(all.len(), 5);
        let ids: Vec<i64> = all.iter().map(|t| t.id).collect();
        let mut sorted_ids = ids.clone();
        sorted_ids.sort();
        assert_eq!(ids, sorted_ids);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_count_by_status(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let first = tasks.create("One", None).unwrap();
        tasks.create("Two", None).unwrap();
        tasks.create("Three", None).unwrap();

        let patch = TaskPatch {
            status: Some(TaskStatus::Complete),
            ..Default::default()
        };
        tasks.update(first.id, &patch).unwrap();

        let stats = tasks.count_by_status().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.complete, 1);
        assert_eq!(stats.incomplete, 2);
        assert_eq!(stats.total, stats.complete + stats.incomplete);

        tasks.delete(first.id).unwrap();
        let stats = tasks.count_by_status().unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.complete, 0);
        assert_eq!(stats.total, stats.complete + stats.incomplete);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_title_sort_scenario(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let a = tasks.create("Buy milk", None).unwrap();
        let b = tasks.create("Write report", None).unwrap();
        let c = tasks.create("Buy milk", None).unwrap();

        let ordered = sorted(tasks.fetch().unwrap(), SortKey::Title, SortDirection::Ascending);
        let ids: Vec<i64> = ordered.iter().map(|t| t.id).collect();

        // Equal titles fall back to ascending id
        assert_eq!(ids, vec![a.id, c.id, b.id]);
    }
}
