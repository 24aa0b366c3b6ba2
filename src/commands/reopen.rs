use crate::db::tasks::Tasks;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{TaskPatch, TaskStatus};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReopenArgs {
    /// Task ID
    id: i64,
}

pub fn cmd(args: ReopenArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let patch = TaskPatch {
        status: Some(TaskStatus::Incomplete),
        ..Default::default()
    };
    match tasks.update(args.id, &patch) {
        Ok(task) => msg_success!(Message::TaskReopened(task.id)),
        Err(TaskError::NotFound(id)) => msg_error!(Message::TaskNotFound(id)),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
