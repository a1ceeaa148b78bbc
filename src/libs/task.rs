use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum trimmed description length accepted by validation.
pub const MAX_DESCRIPTION_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Severity rank used for descending priority sorts.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parses a priority level from its stored text form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Not a clap value enum: the `list --sort` flag accepts any string and
// unrecognized keys fall back to `Created` instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Created,
    Priority,
    Name,
}

impl SortKey {
    /// Parses a sort key, silently falling back to `Created` for any
    /// unrecognized value.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "priority" => SortKey::Priority,
            "name" => SortKey::Name,
            _ => SortKey::Created,
        }
    }
}

/// A single to-do item as persisted in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A task candidate before persistence: the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(description: &str, priority: Priority) -> Self {
        TaskDraft {
            description: description.to_string(),
            priority,
            completed: false,
        }
    }
}

/// Aggregate task counts, derived on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl TaskStats {
    pub fn calculate(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();

        TaskStats {
            total,
            completed,
            remaining: total - completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task description is required")]
    DescriptionRequired,
    #[error("Task description must be less than 200 characters")]
    DescriptionTooLong,
    #[error("Invalid priority level")]
    InvalidPriority,
}

/// Validates a task candidate before persistence.
///
/// Checks run in a fixed precedence order and only the first failure is
/// reported: empty description, oversized description, unknown priority.
pub fn validate_task(description: &str, priority: &str) -> Result<(), ValidationError> {
    let trimmed = description.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }

    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }

    if Priority::parse(priority).is_none() {
        return Err(ValidationError::InvalidPriority);
    }

    Ok(())
}

/// Returns a newly ordered copy of the task collection; the input is left
/// untouched. All sorts are stable, so equal elements keep their original
/// relative order.
pub fn sort_tasks(tasks: &[Task], key: SortKey) -> Vec<Task> {
    let mut sorted = tasks.to_vec();

    match key {
        SortKey::Priority => sorted.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
        SortKey::Name => sorted.sort_by(|a, b| a.description.to_lowercase().cmp(&b.description.to_lowercase())),
        SortKey::Created => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    sorted
}
