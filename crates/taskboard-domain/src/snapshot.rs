//! Read-only view of the board for rendering.
//!
//! A `BoardSnapshot` is an owned copy: the presentation layer can keep,
//! serialize, or mutate it freely without any effect on the board it came
//! from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::{Assignee, Task, TaskId, TaskPriority, TaskStatus};

/// Card-level rendering of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    pub summary: Option<String>,
    pub assignee: Option<Assignee>,
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub comment_count: usize,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            summary: task.summary(),
            assignee: task.assignee.clone(),
            due_date: task.due_date,
            priority: task.priority,
            status: task.status,
            comment_count: task.comments.len(),
        }
    }
}

/// Completion summary, as on the dashboard's project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Share of completed tasks, rounded to a whole percent. Zero on an empty board.
    pub percent: u8,
}

impl Progress {
    pub fn new(todo: usize, in_progress: usize, completed: usize) -> Self {
        let total = todo + in_progress + completed;
        let percent = match total {
            0 => 0,
            _ => u8::try_from((completed * 100 + total / 2) / total).unwrap_or(100),
        };
        Self {
            total,
            todo,
            in_progress,
            completed,
            percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub status: TaskStatus,
    pub label: String,
    pub tasks: Vec<TaskView>,
}

impl ColumnSnapshot {
    /// Header text, e.g. `To Do (3)`.
    pub fn header(&self) -> String {
        format!("{} ({})", self.label, self.tasks.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: Vec<ColumnSnapshot>,
}

impl BoardSnapshot {
    pub fn column(&self, status: TaskStatus) -> Option<&ColumnSnapshot> {
        self.columns.iter().find(|column| column.status == status)
    }

    pub fn task_ids(&self, status: TaskStatus) -> Vec<TaskId> {
        self.column(status)
            .map(|column| column.tasks.iter().map(|task| task.id).collect())
            .unwrap_or_default()
    }

    /// Columns currently holding `task_id`. Always zero or one on a consistent board.
    pub fn columns_containing(&self, task_id: TaskId) -> Vec<TaskStatus> {
        self.columns
            .iter()
            .filter(|column| column.tasks.iter().any(|task| task.id == task_id))
            .map(|column| column.status)
            .collect()
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(|column| column.tasks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_snapshot_columns_in_render_order() {
        let board = Board::new();
        let snapshot = board.snapshot();
        let statuses: Vec<_> = snapshot.columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, TaskStatus::ALL.to_vec());
        assert_eq!(snapshot.total(), 0);
    }

    #[test]
    fn test_snapshot_is_detached_from_board() {
        let task = Task::new("Create style guide", TaskStatus::ToDo);
        let board = Board::initialize(vec![task.clone()]).unwrap();

        let mut snapshot = board.snapshot();
        snapshot.columns[0].tasks.clear();
        snapshot.columns[0].label = "Backlog".to_string();

        let fresh = board.snapshot();
        assert_eq!(fresh.task_ids(TaskStatus::ToDo), vec![task.id]);
        assert_eq!(fresh.columns[0].label, "To Do");
    }

    #[test]
    fn test_header_and_lookup() {
        let task = Task::new("Project setup", TaskStatus::Done);
        let board = Board::initialize(vec![task.clone()]).unwrap();
        let snapshot = board.snapshot();

        assert_eq!(snapshot.column(TaskStatus::Done).unwrap().header(), "Done (1)");
        assert_eq!(snapshot.columns_containing(task.id), vec![TaskStatus::Done]);
        assert!(snapshot.task_ids(TaskStatus::ToDo).is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let task = Task::new("Requirements gathering", TaskStatus::Done);
        let board = Board::initialize(vec![task]).unwrap();

        let json = serde_json::to_value(board.snapshot()).unwrap();
        assert_eq!(json["columns"][2]["label"], "Done");
        assert_eq!(json["columns"][2]["tasks"][0]["title"], "Requirements gathering");
        assert_eq!(json["columns"][2]["tasks"][0]["status"], "Done");
    }

    #[test]
    fn test_progress_percent() {
        // The dashboard's Website Redesign card: 18 of 24 tasks complete.
        let progress = Progress::new(4, 2, 18);
        assert_eq!(progress.total, 24);
        assert_eq!(progress.percent, 75);

        assert_eq!(Progress::new(5, 0, 2).percent, 29);
        assert_eq!(Progress::new(0, 0, 3).percent, 100);
        assert_eq!(Progress::new(0, 0, 0).percent, 0);
    }
}
