use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let all = tasks.fetch_all()?;
    if all.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    if !args.yes && Config::read()?.confirm_before_clear() {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearAll(all.len()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::ClearCancelled);
            return Ok(());
        }
    }

    tasks.clear_all()?;
    msg_success!(Message::TasksCleared);

    Ok(())
}
