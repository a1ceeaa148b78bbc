//! Task export for backup and external analysis.
//!
//! Writes the current task collection to CSV or JSON. All fields use string
//! representations so the output stays stable across tools.

use super::task::Task;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and simple parsers.
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Serializable task row used by both export formats.
#[derive(Debug, Serialize)]
pub struct ExportTask {
    pub id: String,
    pub description: String,
    pub priority: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id.clone(),
            description: task.description.clone(),
            priority: task.priority.to_string(),
            completed: task.completed,
            created_at: task.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: task.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Writes the tasks to the target file and returns its path.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let path = self.output.clone().unwrap_or_else(|| self.default_path());
        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&path)?;
                for row in &rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                let mut file = File::create(&path)?;
                file.write_all(json.as_bytes())?;
            }
        }

        Ok(path)
    }

    fn default_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        PathBuf::from(format!("tasks_{}.{}", stamp, self.format.extension()))
    }
}
