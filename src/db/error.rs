use thiserror::Error;

/// Persistence failure, one variant per operation family.
///
/// Each variant carries a fixed user-facing message and keeps the underlying
/// database error as its source for debug output.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Failed to get tasks")]
    Read(#[source] rusqlite::Error),
    #[error("Failed to add task")]
    Write(#[source] rusqlite::Error),
    #[error("Failed to update task")]
    Update(#[source] rusqlite::Error),
    #[error("Failed to delete task")]
    Delete(#[source] rusqlite::Error),
    #[error("Failed to clear tasks")]
    Clear(#[source] rusqlite::Error),
}
