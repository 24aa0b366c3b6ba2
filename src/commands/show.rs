use crate::db::tasks::Tasks;
use crate::libs::envelope::Envelope;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_error;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i64,
    /// Print the task as a JSON envelope
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match tasks.get(args.id) {
        Ok(task) => {
            if args.json {
                Envelope::ok(task).print()?;
            } else {
                View::tasks(std::slice::from_ref(&task))?;
            }
        }
        Err(TaskError::NotFound(id)) => {
            if args.json {
                Envelope::failure(Message::TaskNotFound(id).to_string()).print()?;
            } else {
                msg_error!(Message::TaskNotFound(id));
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
