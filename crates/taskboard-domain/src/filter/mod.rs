//! Task filtering functionality.
//!
//! Provides traits and implementations for narrowing the board down to the
//! tasks a view is interested in.

pub mod task_filter;
pub mod task_filters;

pub use task_filter::{
    AssigneeFilter, CompositeFilter, OverdueFilter, PriorityFilter, StatusFilter, TaskFilter,
};
pub use task_filters::TaskFilters;
