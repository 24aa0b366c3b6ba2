use crate::db::tasks::Tasks;
use crate::libs::envelope::Envelope;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Longer free-form description
    #[arg(short, long)]
    description: Option<String>,
    /// Print the created task as a JSON envelope
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match tasks.create(&args.title, args.description.as_deref()) {
        Ok(task) => {
            if args.json {
                let message = Message::TaskCreated(task.title.clone()).to_string();
                Envelope::ok_with_message(task, message).print()?;
            } else {
                msg_success!(Message::TaskCreated(task.title.clone()));
                View::tasks(std::slice::from_ref(&task))?;
            }
        }
        Err(TaskError::Validation(e)) => {
            if args.json {
                Envelope::failure(e.to_string()).print()?;
            } else {
                msg_error!(e);
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
