use crate::db::tasks::Tasks;
use crate::libs::envelope::Envelope;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
    /// Print the outcome as a JSON envelope (skips the prompt)
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    // Fetch first so the prompt can show what is about to be removed
    let task = match tasks.get(args.id) {
        Ok(task) => task,
        Err(TaskError::NotFound(id)) => {
            report_not_found(args.json, id)?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if !args.yes && !args.json {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    match tasks.delete(args.id) {
        Ok(()) => {
            if args.json {
                Envelope::message_only(Message::TaskDeleted(args.id).to_string()).print()?;
            } else {
                msg_success!(Message::TaskDeleted(args.id));
            }
        }
        Err(TaskError::NotFound(id)) => report_not_found(args.json, id)?,
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn report_not_found(json: bool, id: i64) -> Result<()> {
    if json {
        Envelope::failure(Message::TaskNotFound(id).to_string()).print()?;
    } else {
        msg_error!(Message::TaskNotFound(id));
    }
    Ok(())
}
