//! Sample-data seeding for demos and manual testing.

use crate::db::tasks::Tasks;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{TaskPatch, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

const SAMPLE_TASKS: &[(&str, &str, TaskStatus)] = &[
    (
        "Set up the project repository",
        "Create the repository, push the initial commit and configure continuous integration.",
        TaskStatus::Complete,
    ),
    (
        "Write project documentation",
        "Draft the README with setup instructions, command reference and usage examples.",
        TaskStatus::Complete,
    ),
    (
        "Test the JSON output mode",
        "Verify that list, show and stats emit well-formed envelopes for scripting consumers.",
        TaskStatus::Incomplete,
    ),
    (
        "Back up the task database",
        "Copy the database file to the backup drive and confirm it opens cleanly.",
        TaskStatus::Incomplete,
    ),
    (
        "Review open pull requests",
        "Go through the review queue and leave feedback on anything older than two days.",
        TaskStatus::Incomplete,
    ),
    (
        "Plan next week's work",
        "Collect the incomplete tasks, estimate them and pick a realistic subset.",
        TaskStatus::Incomplete,
    ),
    (
        "Clean up completed tasks",
        "Delete completed tasks that are no longer worth keeping around.",
        TaskStatus::Incomplete,
    ),
    (
        "Renew the domain registration",
        "The registration lapses at the end of the month; renew it and check the DNS records.",
        TaskStatus::Incomplete,
    ),
];

#[derive(Debug, Args)]
pub struct SeedArgs {}

pub fn cmd(_args: SeedArgs) -> Result<()> {
    msg_print!(Message::SeedingStarted);

    let mut tasks = Tasks::new()?;
    let mut created = 0usize;
    for (title, description, status) in SAMPLE_TASKS {
        match tasks.create(title, Some(description)) {
            Ok(task) => {
                // New tasks always start incomplete; completed samples go
                // through the normal update path like everything else.
                if *status == TaskStatus::Complete {
                    let patch = TaskPatch {
                        status: Some(TaskStatus::Complete),
                        ..Default::default()
                    };
                    tasks.update(task.id, &patch)?;
                }
                created += 1;
                msg_success!(Message::SeedTaskCreated(task.title));
            }
            Err(TaskError::Validation(e)) => msg_error!(Message::SeedTaskFailed(title.to_string(), e.to_string())),
            Err(e) => return Err(e.into()),
        }
    }

    msg_print!(Message::SeedingCompleted(created), true);
    let stats = tasks.count_by_status()?;
    View::stats(&stats)?;

    Ok(())
}
