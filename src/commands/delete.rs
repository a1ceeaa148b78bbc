use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id (or unique prefix)
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match super::find_task(&mut tasks, &args.id)? {
        Some(task) => {
            tasks.remove(&task.id)?;
            msg_success!(Message::TaskDeleted(task.id));
        }
        None => msg_error!(Message::TaskNotFound(args.id)),
    }

    Ok(())
}
