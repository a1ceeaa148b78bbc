#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use std::fs;
    use taskpad::libs::export::{ExportFormat, Exporter};
    use taskpad::libs::task::{Priority, Task};

    fn sample_tasks() -> Vec<Task> {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap().naive_utc();
        vec![
            Task {
                id: "11111111-aaaa-bbbb-cccc-000000000001".to_string(),
                description: "Buy groceries".to_string(),
                priority: Priority::High,
                completed: false,
                created_at: ts,
                updated_at: ts,
            },
            Task {
                id: "11111111-aaaa-bbbb-cccc-000000000002".to_string(),
                description: "Call dentist".to_string(),
                priority: Priority::Low,
                completed: true,
                created_at: ts,
                updated_at: ts,
            },
        ]
    }

    #[test]
    fn test_export_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("tasks.csv");

        let path = Exporter::new(ExportFormat::Csv, Some(output.clone())).export(&sample_tasks()).unwrap();
        assert_eq!(path, output);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("description"));
        assert!(content.contains("Buy groceries"));
        assert!(content.contains("Call dentist"));
        // Header plus one line per task
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_export_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("tasks.json");

        let path = Exporter::new(ExportFormat::Json, Some(output.clone())).export(&sample_tasks()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["description"], "Buy groceries");
        assert_eq!(rows[0]["priority"], "high");
        assert_eq!(rows[1]["completed"], true);
    }
}
