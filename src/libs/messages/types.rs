#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // description
    TaskUpdated(String), // description
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String), // id
    TaskNotFound(String),
    AmbiguousTaskId(String, usize), // prefix, match count
    TasksCleared,
    NoTasksFound,
    NoChangesDetected,
    ValidationFailed(String),
    ConfirmClearAll(usize),
    ClearCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,
    PromptDefaultSort,
    PromptConfirmClear,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // file path
    NothingToExport,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NoMigrationsApplied,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
