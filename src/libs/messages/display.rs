//! Display implementation for taskpad application messages.
//!
//! Converts structured `Message` values into the human-readable text shown in
//! the terminal. All user-facing strings live here, so wording stays
//! consistent and a future localization pass has a single place to touch.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(description) => format!("Task '{}' created", description),
            Message::TaskUpdated(description) => format!("Task '{}' updated", description),
            Message::TaskCompleted(description) => format!("Task '{}' completed", description),
            Message::TaskReopened(description) => format!("Task '{}' reopened", description),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task not found: {}", id),
            Message::AmbiguousTaskId(prefix, count) => {
                format!("Task id '{}' is ambiguous ({} matches), use more characters", prefix, count)
            }
            Message::TasksCleared => "All tasks deleted".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ValidationFailed(reason) => reason.clone(),
            Message::ConfirmClearAll(count) => format!("Delete all {} tasks?", count),
            Message::ClearCancelled => "Clear cancelled".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),
            Message::PromptDefaultSort => "Default sort order for 'list'".to_string(),
            Message::PromptConfirmClear => "Ask for confirmation before 'clear'?".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Tasks exported to: {}", path),
            Message::NothingToExport => "No tasks to export".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NoMigrationsApplied => "No migrations applied yet".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
        };
        write!(f, "{}", text)
    }
}
