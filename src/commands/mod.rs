pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod reopen;
pub mod seed;
pub mod show;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks with optional filtering and sorting")]
    List(list::ListArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task's title, description or status")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task complete")]
    Complete(complete::CompleteArgs),
    #[command(about = "Mark a task incomplete again")]
    Reopen(reopen::ReopenArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show task counts by status")]
    Stats(stats::StatsArgs),
    #[command(about = "Fill the database with sample tasks")]
    Seed(seed::SeedArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
            Commands::Reopen(args) => reopen::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Seed(args) => seed::cmd(args),
        }
    }
}
