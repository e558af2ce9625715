//! Task search functionality.
//!
//! Free-text search over the board. All searchers are case-insensitive and
//! an empty query matches every task.

use crate::task::Task;

/// Trait for searching tasks by various criteria.
pub trait TaskSearcher {
    /// Returns true if the task matches the search criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Search tasks by title.
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl TaskSearcher for TitleSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.query)
    }
}

/// Search tasks by description. Tasks without one only match an empty query.
pub struct DescriptionSearcher {
    query: String,
}

impl DescriptionSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for DescriptionSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&self.query))
    }
}

/// Search tasks by assignee name.
pub struct AssigneeSearcher {
    query: String,
}

impl AssigneeSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskSearcher for AssigneeSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.assignee
            .as_ref()
            .is_some_and(|assignee| assignee.name.to_lowercase().contains(&self.query))
    }
}

/// Enum dispatch for searching tasks by a specific field.
pub enum SearchBy {
    Title(TitleSearcher),
    Description(DescriptionSearcher),
    Assignee(AssigneeSearcher),
}

impl TaskSearcher for SearchBy {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Title(s) => s.matches(task),
            Self::Description(s) => s.matches(task),
            Self::Assignee(s) => s.matches(task),
        }
    }
}

/// Matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    /// Create an empty composite searcher (matches all tasks).
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Title, description, and assignee searchers for the same query.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Description(DescriptionSearcher::new(query.clone())),
                SearchBy::Assignee(AssigneeSearcher::new(query)),
            ],
        }
    }

    pub fn with_search(mut self, searcher: SearchBy) -> Self {
        self.searchers.push(searcher);
        self
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskSearcher for CompositeSearcher {
    fn matches(&self, task: &Task) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|searcher| searcher.matches(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Assignee, TaskStatus};

    fn auth_task() -> Task {
        Task::new("Implement user authentication", TaskStatus::InProgress)
            .with_description("Set up login, registration, and password reset functionality")
            .with_assignee(Assignee::new("2", "John Doe"))
    }

    #[test]
    fn test_title_searcher_matches() {
        let task = auth_task();
        assert!(TitleSearcher::new("auth").matches(&task));
        assert!(TitleSearcher::new("AUTH").matches(&task));
        assert!(!TitleSearcher::new("navbar").matches(&task));
        assert!(TitleSearcher::new("").matches(&task));
        assert_eq!(TitleSearcher::new("Auth").query(), "auth");
    }

    #[test]
    fn test_description_searcher() {
        let task = auth_task();
        assert!(DescriptionSearcher::new("password").matches(&task));
        assert!(!DescriptionSearcher::new("wireframe").matches(&task));

        let bare = Task::new("No description", TaskStatus::ToDo);
        assert!(!DescriptionSearcher::new("password").matches(&bare));
        assert!(DescriptionSearcher::new("").matches(&bare));
    }

    #[test]
    fn test_assignee_searcher() {
        let task = auth_task();
        assert!(AssigneeSearcher::new("doe").matches(&task));
        assert!(!AssigneeSearcher::new("wilson").matches(&task));
    }

    #[test]
    fn test_composite_searcher_any_match() {
        let task = auth_task();
        assert!(CompositeSearcher::all("registration").matches(&task));
        assert!(CompositeSearcher::all("john").matches(&task));
        assert!(!CompositeSearcher::all("browser").matches(&task));
        assert!(CompositeSearcher::new().matches(&task));
    }
}
