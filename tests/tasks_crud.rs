#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use std::thread::sleep;
    use std::time::Duration;
    use taskpad::db::tasks::Tasks;
    use taskpad::libs::task::{sort_tasks, Priority, SortKey, TaskDraft};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn store(&self) -> Tasks {
            let conn = Connection::open(self.temp_dir.path().join("taskpad.db")).unwrap();
            Tasks::with_connection(conn).unwrap()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_round_trip(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let created = tasks.insert(&TaskDraft::new("Write report", Priority::High)).unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, created.updated_at);
        assert!(!created.completed);

        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
        assert_eq!(all[0].description, "Write report");
        assert_eq!(all[0].priority, Priority::High);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_flips_completed(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let mut task = tasks.insert(&TaskDraft::new("Water plants", Priority::Low)).unwrap();
        sleep(Duration::from_millis(5));

        task.completed = true;
        let updated = tasks.update(&task).unwrap();

        let stored = tasks.fetch_by_id(&task.id).unwrap().unwrap();
        assert!(stored.completed);
        assert_eq!(stored.created_at, task.created_at);
        assert!(stored.updated_at >= stored.created_at);
        assert_eq!(stored, updated);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_upserts_by_id(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let mut task = tasks.insert(&TaskDraft::new("Old description", Priority::Medium)).unwrap();
        task.description = "New description".to_string();
        task.priority = Priority::High;
        tasks.update(&task).unwrap();

        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description, "New description");
        assert_eq!(all[0].priority, Priority::High);
        assert_eq!(all[0].id, task.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_remove_is_idempotent(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        let task = tasks.insert(&TaskDraft::new("Disposable", Priority::Medium)).unwrap();
        tasks.remove(&task.id).unwrap();
        assert!(tasks.fetch_all().unwrap().is_empty());

        // Removing the same id again is a no-op, not an error
        tasks.remove(&task.id).unwrap();
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_by_id_missing(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        assert!(tasks.fetch_by_id("no-such-id").unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_clear_all(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        for i in 1..=3 {
            tasks.insert(&TaskDraft::new(&format!("Task {}", i), Priority::Medium)).unwrap();
        }
        assert_eq!(tasks.fetch_all().unwrap().len(), 3);

        tasks.clear_all().unwrap();
        assert!(tasks.fetch_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tasks_survive_reconnect(ctx: &mut TaskTestContext) {
        let task = {
            let mut tasks = ctx.store();
            tasks.insert(&TaskDraft::new("Persistent", Priority::Low)).unwrap()
        };

        // A fresh connection to the same file sees the record
        let mut tasks = ctx.store();
        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], task);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_order_sort_scenario(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.store();

        for priority in [Priority::High, Priority::Medium, Priority::Low] {
            tasks.insert(&TaskDraft::new(&format!("{} task", priority), priority)).unwrap();
            sleep(Duration::from_millis(5));
        }

        let all = tasks.fetch_all().unwrap();

        let by_priority = sort_tasks(&all, SortKey::Priority);
        let ranks: Vec<u8> = by_priority.iter().map(|t| t.priority.rank()).collect();
        assert_eq!(ranks, vec![3, 2, 1]);

        // Newest first: reverse insertion order
        let by_created = sort_tasks(&all, SortKey::Created);
        let priorities: Vec<Priority> = by_created.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![Priority::Low, Priority::Medium, Priority::High]);
    }
}
