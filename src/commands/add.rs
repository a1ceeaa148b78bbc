use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{validate_task, Priority, TaskDraft};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    description: String,
    /// Priority level
    #[arg(short, long, value_enum, default_value = "medium")]
    priority: Priority,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    if let Err(reason) = validate_task(&args.description, args.priority.as_str()) {
        msg_error!(Message::ValidationFailed(reason.to_string()));
        return Ok(());
    }

    let task = Tasks::new()?.insert(&TaskDraft::new(args.description.trim(), args.priority))?;

    msg_success!(Message::TaskCreated(task.description));

    Ok(())
}
