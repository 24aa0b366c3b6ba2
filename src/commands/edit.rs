use crate::db::tasks::Tasks;
use crate::libs::envelope::Envelope;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskPatch, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i64,
    /// New title
    #[arg(long)]
    title: Option<String>,
    /// New description
    #[arg(long)]
    description: Option<String>,
    /// New status ('complete' or 'incomplete')
    #[arg(long)]
    status: Option<String>,
    /// Print the updated task as a JSON envelope
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let current = match tasks.get(args.id) {
        Ok(task) => task,
        Err(TaskError::NotFound(id)) => {
            report_not_found(args.json, id)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let status = match &args.status {
        Some(raw) => match raw.parse::<TaskStatus>() {
            Ok(status) => Some(status),
            Err(e) => {
                report_validation(args.json, e.to_string())?;
                return Ok(());
            }
        },
        None => None,
    };

    // With no field flags the edit runs interactively, pre-filled with
    // the current values; --json implies a scripted caller and skips it.
    let patch = if args.title.is_none() && args.description.is_none() && status.is_none() && !args.json {
        prompt_patch(&current)?
    } else {
        TaskPatch {
            title: args.title,
            description: args.description,
            status,
        }
    };

    if patch.is_empty() {
        if args.json {
            Envelope::message_only(Message::NoChangesDetected.to_string()).print()?;
        } else {
            msg_info!(Message::NoChangesDetected);
        }
        return Ok(());
    }

    match tasks.update(args.id, &patch) {
        Ok(task) => {
            if args.json {
                let message = Message::TaskUpdated(task.id).to_string();
                Envelope::ok_with_message(task, message).print()?;
            } else {
                msg_success!(Message::TaskUpdated(task.id));
                View::tasks(std::slice::from_ref(&task))?;
            }
        }
        Err(TaskError::Validation(e)) => report_validation(args.json, e.to_string())?,
        Err(TaskError::NotFound(id)) => report_not_found(args.json, id)?,
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn prompt_patch(current: &Task) -> Result<TaskPatch> {
    msg_print!(Message::EditingTask(current.title.clone()), true);

    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let statuses = [TaskStatus::Incomplete, TaskStatus::Complete];
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&[statuses[0].as_str(), statuses[1].as_str()])
        .default(statuses.iter().position(|s| *s == current.status).unwrap_or(0))
        .interact()?;
    let status = statuses[selected];

    // Only carry the fields that actually changed
    Ok(TaskPatch {
        title: (title != current.title).then_some(title),
        description: (description != current.description).then_some(description),
        status: (status != current.status).then_some(status),
    })
}

fn report_not_found(json: bool, id: i64) -> Result<()> {
    if json {
        Envelope::failure(Message::TaskNotFound(id).to_string()).print()?;
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}

fn report_validation(json: bool, reason: String) -> Result<()> {
    if json {
        Envelope::failure(reason).print()?;
    } else {
        msg_error!(reason);
    }
    Ok(())
}
