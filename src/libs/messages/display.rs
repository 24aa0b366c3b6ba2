//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so that commands never
//! hardcode strings and the wording stays consistent across the CLI.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully", title),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskCompleted(id) => format!("Task {} marked complete", id),
            Message::TaskReopened(id) => format!("Task {} marked incomplete", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),
            Message::TaskNotFound(id) => format!("Task {} not found", id),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::EditingTask(title) => format!("Editing task '{}'", title),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptTaskStatus => "Task status".to_string(),

            // === STATS MESSAGES ===
            Message::StatsHeader => "📊 Task statistics".to_string(),
            Message::StatsSummary(total, complete, incomplete) => {
                format!("{} total, {} complete, {} incomplete", total, complete, incomplete)
            }

            // === SEED MESSAGES ===
            Message::SeedingStarted => "Seeding database with sample tasks...".to_string(),
            Message::SeedTaskCreated(title) => format!("Created task: {}", title),
            Message::SeedTaskFailed(title, reason) => format!("Error creating task '{}': {}", title, reason),
            Message::SeedingCompleted(count) => format!("Database seeding completed! Created {} sample tasks", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptDbPath => "Database file path".to_string(),
        };
        write!(f, "{}", text)
    }
}
