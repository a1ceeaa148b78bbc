#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use taskpad::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use taskpad::db::tasks::Tasks;
    use taskpad::libs::task::{Priority, TaskDraft};

    #[test]
    fn test_migrations_run_automatically() {
        let conn = Connection::open_in_memory().unwrap();
        let tasks = Tasks::with_connection(conn).unwrap();

        let version = get_db_version(&tasks.conn).unwrap();
        assert!(version > 0);
        assert!(!needs_migration(&tasks.conn).unwrap());
    }

    #[test]
    fn test_migration_history_in_order() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }

        // Each entry carries the migration name and its application timestamp
        assert_eq!(history[0].1, "create_tasks_table_and_indices");
        assert!(!history[0].2.is_empty());

        assert!(manager.is_migration_applied(&conn, 1).unwrap());
    }

    #[test]
    fn test_history_empty_before_first_migration() {
        let conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(history.is_empty());
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_migration_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        init_with_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
    }

    #[test]
    fn test_lookup_indexes_provisioned() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        for index in ["idx_tasks_created_at", "idx_tasks_priority", "idx_tasks_completed"] {
            let count: i32 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = ?1",
                    [index],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing index {}", index);
        }
    }

    #[test]
    fn test_store_usable_after_repeated_init() {
        let conn = Connection::open_in_memory().unwrap();
        let mut tasks = Tasks::with_connection(conn).unwrap();

        tasks.insert(&TaskDraft::new("First", Priority::Medium)).unwrap();

        // Re-running the migration set must not disturb existing data
        init_with_migrations(&mut tasks.conn).unwrap();
        assert_eq!(tasks.fetch_all().unwrap().len(), 1);
    }
}
