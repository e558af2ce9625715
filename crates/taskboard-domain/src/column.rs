use serde::Serialize;

use crate::task::{TaskId, TaskStatus};

/// Ordered bucket of task ids for one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    status: TaskStatus,
    task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(status: TaskStatus) -> Self {
        Self {
            status,
            task_ids: Vec::new(),
        }
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.task_ids.contains(&task_id)
    }

    pub fn position(&self, task_id: TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| *id == task_id)
    }

    /// Appends at the end. Callers guarantee the id is not already placed anywhere.
    pub(crate) fn push(&mut self, task_id: TaskId) {
        debug_assert!(!self.contains(task_id));
        self.task_ids.push(task_id);
    }

    pub(crate) fn remove(&mut self, task_id: TaskId) -> bool {
        match self.position(task_id) {
            Some(index) => {
                self.task_ids.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_push_preserves_order() {
        let mut column = Column::new(TaskStatus::ToDo);
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        column.push(a);
        column.push(b);
        column.push(c);

        assert_eq!(column.task_ids(), &[a, b, c]);
        assert_eq!(column.position(b), Some(1));
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut column = Column::new(TaskStatus::Done);
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        column.push(a);
        column.push(b);
        column.push(c);

        assert!(column.remove(b));
        assert_eq!(column.task_ids(), &[a, c]);
        assert!(!column.remove(b));
        assert!(!column.contains(b));
    }

    #[test]
    fn test_empty_column() {
        let column = Column::new(TaskStatus::InProgress);
        assert!(column.is_empty());
        assert_eq!(column.status(), TaskStatus::InProgress);
        assert_eq!(column.position(Uuid::new_v4()), None);
    }
}
