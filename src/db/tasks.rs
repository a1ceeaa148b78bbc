use super::db::Db;
use super::error::StoreError;
use super::migrations;
use crate::libs::task::{Priority, Task, TaskDraft};
use chrono::{NaiveDateTime, Timelike, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

/// Timestamps are persisted as fixed-width sortable text.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

const INSERT_TASK: &str = "INSERT INTO tasks (id, description, priority, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPSERT_TASK: &str = "INSERT OR REPLACE INTO tasks (id, description, priority, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, description, priority, completed, created_at, updated_at FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, description, priority, completed, created_at, updated_at FROM tasks WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const CLEAR_TASKS: &str = "DELETE FROM tasks";

/// Persistence adapter for the task collection.
///
/// Each instance owns a fresh connection with migrations applied, so the
/// store survives restarts without any shared process-wide handle. Reads use
/// read-only statements; everything else is a single write statement.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks, StoreError> {
        let db = Db::new()?;

        Ok(Tasks { conn: db.conn })
    }

    /// Builds a store around an injected connection, applying migrations to
    /// it. Lets tests and embedders supply their own database location.
    pub fn with_connection(mut conn: Connection) -> Result<Tasks, StoreError> {
        migrations::init_with_migrations(&mut conn).map_err(|e| StoreError::Init(e.into()))?;

        Ok(Tasks { conn })
    }

    /// Persists a draft, assigning a fresh id and equal creation/update
    /// timestamps, and returns the stored record.
    pub fn insert(&mut self, draft: &TaskDraft) -> Result<Task, StoreError> {
        let now = now_millis();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            description: draft.description.clone(),
            priority: draft.priority,
            completed: draft.completed,
            created_at: now,
            updated_at: now,
        };

        self.conn
            .execute(
                INSERT_TASK,
                params![
                    task.id,
                    task.description,
                    task.priority.as_str(),
                    task.completed,
                    task.created_at.format(TIMESTAMP_FORMAT).to_string(),
                    task.updated_at.format(TIMESTAMP_FORMAT).to_string(),
                ],
            )
            .map_err(StoreError::Write)?;

        Ok(task)
    }

    /// Returns every stored task with timestamps parsed back from their
    /// persisted text form.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS).map_err(StoreError::Read)?;
        let task_iter = stmt.query_map([], map_task).map_err(StoreError::Read)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task.map_err(StoreError::Read)?);
        }

        Ok(tasks)
    }

    pub fn fetch_by_id(&mut self, id: &str) -> Result<Option<Task>, StoreError> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], map_task)
            .optional()
            .map_err(StoreError::Read)
    }

    /// Overwrites the record with the given id, refreshing `updated_at`.
    /// Upsert semantics: a task unknown to the store is simply written.
    pub fn update(&mut self, task: &Task) -> Result<Task, StoreError> {
        let mut updated = task.clone();
        updated.updated_at = now_millis();

        self.conn
            .execute(
                UPSERT_TASK,
                params![
                    updated.id,
                    updated.description,
                    updated.priority.as_str(),
                    updated.completed,
                    updated.created_at.format(TIMESTAMP_FORMAT).to_string(),
                    updated.updated_at.format(TIMESTAMP_FORMAT).to_string(),
                ],
            )
            .map_err(StoreError::Update)?;

        Ok(updated)
    }

    /// Deletes the record with the given id. A missing id is a no-op, not an
    /// error, matching SQLite's DELETE semantics.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.conn.execute(DELETE_TASK, params![id]).map_err(StoreError::Delete)?;

        Ok(())
    }

    /// Empties the entire task store.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.conn.execute(CLEAR_TASKS, []).map_err(StoreError::Clear)?;

        Ok(())
    }
}

/// Current time clamped to the millisecond precision kept by the stored
/// text form, so returned records equal what a later read yields.
fn now_millis() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(now.nanosecond() / 1_000_000 * 1_000_000).unwrap_or(now)
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    let priority: String = row.get(2)?;
    let priority = Priority::parse(&priority)
        .ok_or_else(|| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, format!("unknown priority: {priority}").into()))?;

    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        priority,
        completed: row.get(3)?,
        created_at: parse_timestamp(row, 4)?,
        updated_at: parse_timestamp(row, 5)?,
    })
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
