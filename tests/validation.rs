#[cfg(test)]
mod tests {
    use tasktrack::db::tasks::Tasks;
    use tasktrack::libs::error::{TaskError, ValidationError};
    use tasktrack::libs::task::{validate_title, TaskPatch, TaskStatus, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ValidationTestContext {
        temp_dir: TempDir,
    }

    impl ValidationTestContext {
        fn store(&self) -> Tasks {
            Tasks::open(self.temp_dir.path().join("tasks.db")).unwrap()
        }
    }

    impl TestContext for ValidationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ValidationTestContext { temp_dir }
        }
    }

    #[test_context(ValidationTestContext)]
    #[test]
    fn test_empty_title_is_rejected(ctx: &mut ValidationTestContext) {
        let mut tasks = ctx.store();

        let result = tasks.create("", None);
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::EmptyTitle))));

        let result = tasks.create("   ", None);
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::EmptyTitle))));

        // Nothing was persisted
        assert!(tasks.fetch().unwrap().is_empty());
    }

    #[test_context(ValidationTestContext)]
    #[test]
    fn test_title_length_limit(ctx: &mut ValidationTestContext) {
        let mut tasks = ctx.store();

        let at_limit = "a".repeat(MAX_TITLE_LEN);
        assert!(tasks.create(&at_limit, None).is_ok());

        let over_limit = "a".repeat(MAX_TITLE_LEN + 1);
        let result = tasks.create(&over_limit, None);
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::TitleTooLong))));

        assert_eq!(tasks.fetch().unwrap().len(), 1);
    }

    #[test_context(ValidationTestContext)]
    #[test]
    fn test_description_length_limit(ctx: &mut ValidationTestContext) {
        let mut tasks = ctx.store();

        let at_limit = "d".repeat(MAX_DESCRIPTION_LEN);
        assert!(tasks.create("Fits", Some(&at_limit)).is_ok());

        let over_limit = "d".repeat(MAX_DESCRIPTION_LEN + 1);
        let result = tasks.create("Does not fit", Some(&over_limit));
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::DescriptionTooLong))));

        assert_eq!(tasks.fetch().unwrap().len(), 1);
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // Multibyte characters up to the limit are fine
        let title = "é".repeat(MAX_TITLE_LEN);
        assert!(validate_title(&title).is_ok());

        let title = "é".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(validate_title(&title), Err(ValidationError::TitleTooLong));
    }

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(validate_title("  Buy milk  ").unwrap(), "Buy milk");
    }

    #[test_context(ValidationTestContext)]
    #[test]
    fn test_invalid_update_leaves_record_unchanged(ctx: &mut ValidationTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.create("Valid title", Some("Valid description")).unwrap();

        let patch = TaskPatch {
            title: Some("   ".to_string()),
            description: Some("New description".to_string()),
            status: Some(TaskStatus::Complete),
        };
        let result = tasks.update(created.id, &patch);
        assert!(matches!(result, Err(TaskError::Validation(ValidationError::EmptyTitle))));

        // The failed update rolled back completely
        assert_eq!(tasks.get(created.id).unwrap(), created);
    }

    #[test_context(ValidationTestContext)]
    #[test]
    fn test_not_found_is_reported_before_validation(ctx: &mut ValidationTestContext) {
        let mut tasks = ctx.store();

        // Even an invalid patch reports the missing record first
        let patch = TaskPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(tasks.update(99, &patch), Err(TaskError::NotFound(99))));
    }

    #[test]
    fn test_status_parses_only_the_two_legal_values() {
        assert_eq!("complete".parse::<TaskStatus>().unwrap(), TaskStatus::Complete);
        assert_eq!("incomplete".parse::<TaskStatus>().unwrap(), TaskStatus::Incomplete);
        assert!(matches!("done".parse::<TaskStatus>(), Err(ValidationError::InvalidStatus(_))));
        assert!(matches!("Complete".parse::<TaskStatus>(), Err(ValidationError::InvalidStatus(_))));
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<TaskPatch, _> = serde_json::from_str(r#"{"title": "x", "priority": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_rejects_invalid_status_value() {
        let result: Result<TaskPatch, _> = serde_json::from_str(r#"{"status": "done"}"#);
        assert!(result.is_err());
    }
}
