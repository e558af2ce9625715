//! Task filter implementations.

use chrono::NaiveDate;

use crate::task::{Task, TaskPriority, TaskStatus};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Filter tasks by status column.
pub struct StatusFilter {
    status: TaskStatus,
}

impl StatusFilter {
    pub fn new(status: TaskStatus) -> Self {
        Self { status }
    }
}

impl TaskFilter for StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        task.status == self.status
    }
}

pub struct PriorityFilter {
    priority: TaskPriority,
}

impl PriorityFilter {
    pub fn new(priority: TaskPriority) -> Self {
        Self { priority }
    }
}

impl TaskFilter for PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        task.priority == self.priority
    }
}

/// Filter tasks by assignee name (case-insensitive substring).
///
/// Unassigned tasks never match.
pub struct AssigneeFilter {
    name: String,
}

impl AssigneeFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
        }
    }
}

impl TaskFilter for AssigneeFilter {
    fn matches(&self, task: &Task) -> bool {
        task.assignee
            .as_ref()
            .is_some_and(|assignee| assignee.name.to_lowercase().contains(&self.name))
    }
}

/// Tasks whose due date is before `today`.
pub struct OverdueFilter {
    today: NaiveDate,
}

impl OverdueFilter {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl TaskFilter for OverdueFilter {
    fn matches(&self, task: &Task) -> bool {
        task.is_overdue(self.today)
    }
}

/// Combine multiple filters with AND logic.
///
/// A task matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.filters.iter().all(|filter| filter.matches(task))
    }
}
