use crate::libs::projection::TaskStats;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

/// Longest description shown in the task table before truncation.
const DESCRIPTION_PREVIEW_LEN: usize = 40;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "STATUS", "CREATED", "UPDATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                preview(&task.description),
                task.status,
                task.created_at.format("%Y-%m-%d %H:%M"),
                task.updated_at.format("%Y-%m-%d %H:%M"),
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &TaskStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETE", "INCOMPLETE"]);
        table.add_row(row![stats.total, stats.complete, stats.incomplete]);
        table.printstd();

        Ok(())
    }
}

fn preview(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_LEN {
        return description.to_string();
    }
    let cut: String = description.chars().take(DESCRIPTION_PREVIEW_LEN).collect();
    format!("{}...", cut.trim_end())
}
