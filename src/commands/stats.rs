use crate::db::tasks::Tasks;
use crate::libs::envelope::Envelope;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Print the counts as a JSON envelope
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let stats = Tasks::new()?.count_by_status()?;

    if args.json {
        Envelope::ok(stats).print()?;
        return Ok(());
    }

    msg_print!(Message::StatsHeader, true);
    View::stats(&stats)?;

    Ok(())
}
