//! Task filter configuration.
//!
//! `TaskFilters` holds what the user asked to filter by; `into_filter` turns
//! it into a `TaskFilter` that does the work.

use chrono::NaiveDate;

use super::task_filter::{
    AssigneeFilter, CompositeFilter, OverdueFilter, PriorityFilter, StatusFilter,
};
use crate::task::{TaskPriority, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilters {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    /// Case-insensitive substring of the assignee's name.
    pub assignee: Option<String>,
    pub overdue_only: bool,
}

impl TaskFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_active_filters(&self) -> bool {
        self.status.is_some()
            || self.priority.is_some()
            || self.assignee.is_some()
            || self.overdue_only
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `today` is the reference date for the overdue check.
    pub fn into_filter(self, today: NaiveDate) -> CompositeFilter {
        let mut filter = CompositeFilter::new();
        if let Some(status) = self.status {
            filter = filter.with_filter(Box::new(StatusFilter::new(status)));
        }
        if let Some(priority) = self.priority {
            filter = filter.with_filter(Box::new(PriorityFilter::new(priority)));
        }
        if let Some(name) = self.assignee {
            filter = filter.with_filter(Box::new(AssigneeFilter::new(name)));
        }
        if self.overdue_only {
            filter = filter.with_filter(Box::new(OverdueFilter::new(today)));
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TaskFilter;
    use crate::task::Task;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 12).unwrap()
    }

    #[test]
    fn test_default_has_no_active_filters() {
        let filters = TaskFilters::default();
        assert!(!filters.has_active_filters());
        assert!(filters.into_filter(today()).is_empty());
    }

    #[test]
    fn test_clear_filters() {
        let mut filters = TaskFilters {
            status: Some(TaskStatus::Done),
            priority: Some(TaskPriority::High),
            assignee: Some("jane".to_string()),
            overdue_only: true,
        };
        assert!(filters.has_active_filters());

        filters.clear();
        assert!(!filters.has_active_filters());
    }

    #[test]
    fn test_into_filter_combines_settings() {
        let wireframe = Task::new("Design homepage wireframe", TaskStatus::ToDo)
            .with_priority(TaskPriority::High)
            .with_due_date(NaiveDate::from_ymd_opt(2023, 11, 10).unwrap());
        let style_guide = Task::new("Create style guide", TaskStatus::ToDo)
            .with_priority(TaskPriority::Medium)
            .with_due_date(NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());

        let filter = TaskFilters {
            status: Some(TaskStatus::ToDo),
            overdue_only: true,
            ..Default::default()
        }
        .into_filter(today());

        assert!(filter.matches(&wireframe));
        assert!(!filter.matches(&style_guide));
    }
}
