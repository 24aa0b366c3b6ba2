use crate::db::tasks::Tasks;
use crate::libs::envelope::Envelope;
use crate::libs::error::ValidationError;
use crate::libs::messages::Message;
use crate::libs::projection::{sorted, SortDirection, SortKey, TaskFilter, DEFAULT_SORT_KEY};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only tasks with this status ('complete' or 'incomplete')
    #[arg(short, long)]
    status: Option<String>,
    /// Sort key: created_at, updated_at, title or status
    #[arg(long)]
    sort: Option<String>,
    /// Sort direction: 'ascending' or 'descending'
    #[arg(long)]
    direction: Option<String>,
    /// Print the tasks and counts as a JSON envelope
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let filter = match TaskFilter::parse(args.status.as_deref()) {
        Ok(filter) => filter,
        Err(e) => return report_invalid(args.json, e),
    };
    let key = match &args.sort {
        Some(raw) => match raw.parse::<SortKey>() {
            Ok(key) => key,
            Err(e) => return report_invalid(args.json, e),
        },
        None => DEFAULT_SORT_KEY,
    };
    let direction = match &args.direction {
        Some(raw) => match raw.parse::<SortDirection>() {
            Ok(direction) => direction,
            Err(e) => return report_invalid(args.json, e),
        },
        None => key.default_direction(),
    };

    let mut store = Tasks::new()?;
    let visible = sorted(filter.apply(store.fetch()?), key, direction);
    let stats = store.count_by_status()?;

    if args.json {
        Envelope::ok_with_stats(visible, stats).print()?;
        return Ok(());
    }

    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
    } else {
        msg_print!(Message::TasksHeader, true);
        View::tasks(&visible)?;
    }
    msg_print!(Message::StatsSummary(stats.total, stats.complete, stats.incomplete));

    Ok(())
}

fn report_invalid(json: bool, e: ValidationError) -> Result<()> {
    if json {
        Envelope::failure(e.to_string()).print()?;
    } else {
        msg_error!(e);
    }
    Ok(())
}
