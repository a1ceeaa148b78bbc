use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{validate_task, Priority};
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id (or unique prefix)
    #[arg(required = true)]
    id: String,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New priority level
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    if args.description.is_none() && args.priority.is_none() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let mut tasks = Tasks::new()?;

    let Some(mut task) = super::find_task(&mut tasks, &args.id)? else {
        msg_error!(Message::TaskNotFound(args.id));
        return Ok(());
    };

    let description = args.description.unwrap_or_else(|| task.description.clone());
    let priority = args.priority.unwrap_or(task.priority);

    if let Err(reason) = validate_task(&description, priority.as_str()) {
        msg_error!(Message::ValidationFailed(reason.to_string()));
        return Ok(());
    }

    task.description = description.trim().to_string();
    task.priority = priority;
    let updated = tasks.update(&task)?;

    msg_success!(Message::TaskUpdated(updated.description));

    Ok(())
}
