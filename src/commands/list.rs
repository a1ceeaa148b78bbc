use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{sort_tasks, SortKey, TaskStats};
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort order: created, priority or name (anything else falls back to created)
    #[arg(short, long)]
    sort: Option<String>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let key = match &args.sort {
        Some(value) => SortKey::parse_or_default(value),
        None => Config::read()?.sort_key(),
    };

    let tasks = Tasks::new()?.fetch_all()?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&sort_tasks(&tasks, key));
    View::stats(&TaskStats::calculate(&tasks));

    Ok(())
}
