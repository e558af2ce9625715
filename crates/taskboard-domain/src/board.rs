//! Board state store.
//!
//! The board is the single owner of task placement. Every task id lives in
//! exactly one of the three status columns, and the column it lives in always
//! matches the task's `status` field. All mutators validate their input
//! before touching any state, so a failed call leaves the board unchanged.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use taskboard_core::{TaskboardError, TaskboardResult};

use crate::column::Column;
use crate::filter::TaskFilter;
use crate::search::TaskSearcher;
use crate::snapshot::{BoardSnapshot, ColumnSnapshot, Progress, TaskView};
use crate::task::{Comment, Task, TaskId, TaskStatus, TaskUpdate};

/// Result of a successful `move_task`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub task_id: TaskId,
    pub from: TaskStatus,
    pub to: TaskStatus,
    /// False for a same-column move, which changes nothing.
    pub moved: bool,
}

#[derive(Debug, Clone)]
pub struct Board {
    tasks: HashMap<TaskId, Task>,
    todo: Column,
    in_progress: Column,
    done: Column,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
            todo: Column::new(TaskStatus::ToDo),
            in_progress: Column::new(TaskStatus::InProgress),
            done: Column::new(TaskStatus::Done),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board by grouping tasks on their status, keeping input order
    /// within each column. A repeated task id is rejected.
    pub fn initialize(tasks: impl IntoIterator<Item = Task>) -> TaskboardResult<Self> {
        let mut board = Self::new();
        for task in tasks {
            board.add_task(task)?;
        }
        tracing::debug!(
            todo = board.todo.len(),
            in_progress = board.in_progress.len(),
            done = board.done.len(),
            "Initialized board"
        );
        Ok(board)
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        match status {
            TaskStatus::ToDo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        match status {
            TaskStatus::ToDo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        TaskStatus::ALL.into_iter().map(|status| self.column(status))
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.get(&task_id)
    }

    pub fn status_of(&self, task_id: TaskId) -> Option<TaskStatus> {
        self.tasks.get(&task_id).map(|task| task.status)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task count per column, as shown in the column headers.
    pub fn counts(&self) -> BTreeMap<TaskStatus, usize> {
        self.columns()
            .map(|column| (column.status(), column.len()))
            .collect()
    }

    /// Tasks in render order: column by column, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.columns()
            .flat_map(|column| column.task_ids().iter())
            .filter_map(|id| self.tasks.get(id))
    }

    /// Appends a task to the column of its status.
    pub fn add_task(&mut self, task: Task) -> TaskboardResult<()> {
        if self.tasks.contains_key(&task.id) {
            tracing::warn!(task_id = %task.id, "Rejected duplicate task id");
            return Err(TaskboardError::Validation(format!(
                "duplicate task id {}",
                task.id
            )));
        }
        self.column_mut(task.status).push(task.id);
        self.tasks.insert(task.id, task);
        Ok(())
    }

    /// Moves a task from `source` to the end of `destination`.
    ///
    /// Fails with `NotFound` when the task is not in `source`'s column. A move
    /// onto the same column succeeds without changing anything.
    pub fn move_task(
        &mut self,
        task_id: TaskId,
        source: TaskStatus,
        destination: TaskStatus,
    ) -> TaskboardResult<MoveOutcome> {
        if !self.column(source).contains(task_id) || !self.tasks.contains_key(&task_id) {
            return Err(TaskboardError::NotFound(format!(
                "task {} in column '{}'",
                task_id, source
            )));
        }

        if source == destination {
            tracing::debug!(%task_id, column = %source, "Same-column move ignored");
            return Ok(MoveOutcome {
                task_id,
                from: source,
                to: destination,
                moved: false,
            });
        }

        self.column_mut(source).remove(task_id);
        self.column_mut(destination).push(task_id);
        if let Some(task) = self.tasks.get_mut(&task_id) {
            task.status = destination;
        }

        tracing::debug!(%task_id, from = %source, to = %destination, "Moved task");
        Ok(MoveOutcome {
            task_id,
            from: source,
            to: destination,
            moved: true,
        })
    }

    /// Removes a task from whichever column holds it.
    pub fn remove_task(&mut self, task_id: TaskId) -> TaskboardResult<Task> {
        let task = self
            .tasks
            .remove(&task_id)
            .ok_or_else(|| TaskboardError::NotFound(format!("task {}", task_id)))?;
        self.column_mut(task.status).remove(task_id);
        tracing::debug!(%task_id, column = %task.status, "Removed task");
        Ok(task)
    }

    /// Edits a task's content. Status and placement are untouched.
    pub fn update_task(&mut self, task_id: TaskId, update: TaskUpdate) -> TaskboardResult<&Task> {
        if update.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            return Err(TaskboardError::Validation(
                "task title cannot be empty".to_string(),
            ));
        }
        let task = self
            .tasks
            .get_mut(&task_id)
            .ok_or_else(|| TaskboardError::NotFound(format!("task {}", task_id)))?;
        let changed = task.apply_update(update);
        tracing::debug!(%task_id, changed, "Updated task");
        Ok(task)
    }

    /// Appends a comment to the end of a task's thread.
    pub fn add_comment(&mut self, task_id: TaskId, comment: Comment) -> TaskboardResult<&Task> {
        let task = self
            .tasks
            .get_mut(&task_id)
            .ok_or_else(|| TaskboardError::NotFound(format!("task {}", task_id)))?;
        task.comments.push(comment);
        tracing::debug!(%task_id, comments = task.comments.len(), "Added comment");
        Ok(task)
    }

    /// Completion summary over the whole board.
    pub fn progress(&self) -> Progress {
        Progress::new(self.todo.len(), self.in_progress.len(), self.done.len())
    }

    /// Owned, read-only copy of the board for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        let columns = self
            .columns()
            .map(|column| ColumnSnapshot {
                status: column.status(),
                label: column.status().label().to_string(),
                tasks: column
                    .task_ids()
                    .iter()
                    .filter_map(|id| self.tasks.get(id))
                    .map(TaskView::from)
                    .collect(),
            })
            .collect();
        BoardSnapshot { columns }
    }

    /// Task views in render order that pass both the filter and the search.
    pub fn tasks_matching(
        &self,
        filter: &dyn TaskFilter,
        searcher: &dyn TaskSearcher,
    ) -> Vec<TaskView> {
        self.iter()
            .filter(|task| filter.matches(task) && searcher.matches(task))
            .map(TaskView::from)
            .collect()
    }
}
