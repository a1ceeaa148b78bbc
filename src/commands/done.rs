use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id (or unique prefix)
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let Some(mut task) = super::find_task(&mut tasks, &args.id)? else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    task.completed = !task.completed;
    let updated = tasks.update(&task)?;

    if updated.completed {
        msg_success!(Message::TaskCompleted(updated.description));
    } else {
        msg_success!(Message::TaskReopened(updated.description));
    }

    Ok(())
}
