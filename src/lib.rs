//! # Taskpad - a local-first to-do manager
//!
//! A command-line utility for managing to-do tasks with priorities,
//! completion tracking, and local persistence.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete, and delete tasks
//! - **Priorities**: Tag tasks as low, medium, or high priority
//! - **Sorting**: Order tasks by creation time, priority, or name
//! - **Statistics**: Aggregate totals of completed and remaining tasks
//! - **Local Persistence**: All data lives in a per-user SQLite database
//! - **Data Export**: Export tasks to CSV and JSON formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskpad::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
