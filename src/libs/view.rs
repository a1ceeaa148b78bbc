use super::task::{Priority, Task, TaskStats};
use prettytable::{row, Cell, Row, Table};

/// Fixed display styling for a priority level.
///
/// Color tokens cover the background, text, border, and indicator dot of a
/// priority badge; `cell_spec` is the prettytable style string applied to the
/// priority column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityStyle {
    pub bg: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub dot: &'static str,
    pub cell_spec: &'static str,
}

/// Pure lookup of the styling descriptor for a priority level.
pub fn priority_style(priority: Priority) -> PriorityStyle {
    match priority {
        Priority::Low => PriorityStyle {
            bg: "blue-100",
            text: "blue-700",
            border: "blue-200",
            dot: "blue-500",
            cell_spec: "Fb",
        },
        Priority::Medium => PriorityStyle {
            bg: "green-100",
            text: "green-700",
            border: "green-200",
            dot: "green-500",
            cell_spec: "Fg",
        },
        Priority::High => PriorityStyle {
            bg: "red-100",
            text: "red-700",
            border: "red-200",
            dot: "red-500",
            cell_spec: "Fr",
        },
    }
}

const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESCRIPTION", "PRIORITY", "DONE", "CREATED", "UPDATED"]);
        for task in tasks {
            let style = priority_style(task.priority);
            table.add_row(Row::new(vec![
                Cell::new(short_id(&task.id)),
                Cell::new(&task.description),
                Cell::new(&format!("● {}", task.priority)).style_spec(style.cell_spec),
                Cell::new(if task.completed { "✔" } else { "" }),
                Cell::new(&task.created_at.format(DISPLAY_TIME_FORMAT).to_string()),
                Cell::new(&task.updated_at.format(DISPLAY_TIME_FORMAT).to_string()),
            ]));
        }
        table.printstd();
    }

    pub fn stats(stats: &TaskStats) {
        println!("Total: {} | Completed: {} | Remaining: {}", stats.total, stats.completed, stats.remaining);
    }
}

/// First id segment, enough to address a task from the command line.
fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
