use crate::db::tasks::Tasks;
use crate::libs::task::TaskStats;
use crate::libs::view::View;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let tasks = Tasks::new()?.fetch_all()?;
    View::stats(&TaskStats::calculate(&tasks));

    Ok(())
}
