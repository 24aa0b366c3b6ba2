#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskDeleted(i64),
    TaskNotFound(i64),
    TasksHeader,
    NoTasksFound,
    NoChangesDetected,
    EditingTask(String),
    ConfirmDeleteTask(String),
    DeleteCancelled,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,

    // === STATS MESSAGES ===
    StatsHeader,
    StatsSummary(i64, i64, i64),

    // === SEED MESSAGES ===
    SeedingStarted,
    SeedTaskCreated(String),
    SeedTaskFailed(String, String),
    SeedingCompleted(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDbPath,
}
