pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod stats;

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks with stats")]
    List(list::ListArgs),
    #[command(about = "Toggle task completion")]
    Done(done::DoneArgs),
    #[command(about = "Edit a task's description or priority")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "Show task statistics")]
    Stats,
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init,
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
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
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Init => init::cmd(),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Resolves a task by full id or unique id prefix, so users can address
/// tasks by the short form shown in the list view.
pub(crate) fn find_task(tasks: &mut Tasks, id: &str) -> Result<Option<Task>> {
    if let Some(task) = tasks.fetch_by_id(id)? {
        return Ok(Some(task));
    }

    let mut matches: Vec<Task> = tasks.fetch_all()?.into_iter().filter(|t| t.id.starts_with(id)).collect();
    match matches.len() {
        0 | 1 => Ok(matches.pop()),
        n => msg_bail_anyhow!(Message::AmbiguousTaskId(id.to_string(), n)),
    }
}
