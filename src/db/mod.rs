//! Database layer for the taskpad application.
//!
//! Local persistence built on SQLite: a per-user database file holding the
//! task collection, a migration system for schema evolution, and a typed
//! error per operation family.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::db::tasks::Tasks;
//! use taskpad::libs::task::{Priority, TaskDraft};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let task = tasks.insert(&TaskDraft::new("Review PR #123", Priority::High))?;
//! assert_eq!(task.created_at, task.updated_at);
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization.
pub mod db;

/// Typed persistence errors, one per operation family.
pub mod error;

/// Database schema migration system.
pub mod migrations;

/// CRUD operations for the task collection.
pub mod tasks;

pub use error::StoreError;
