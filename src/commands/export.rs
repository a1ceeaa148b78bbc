use crate::db::tasks::Tasks;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file path (defaults to tasks_<timestamp>.<ext> in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tasks = Tasks::new()?.fetch_all()?;
    if tasks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    let path = Exporter::new(args.format, args.output).export(&tasks)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
