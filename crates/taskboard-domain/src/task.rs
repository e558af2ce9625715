use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use taskboard_core::TaskboardError;
use uuid::Uuid;

pub type TaskId = Uuid;

const SUMMARY_LENGTH: usize = 100;

/// Deserializes from any spelling `FromStr` accepts; serializes as the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Columns in render order.
    pub const ALL: [TaskStatus; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    pub fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskboardError;

    /// Accepts `todo`, `To Do`, `in_progress`, `In Progress`, `done` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "todo" => Ok(Self::ToDo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(TaskboardError::Validation(format!(
                "unknown task status '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = TaskboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskPriority {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskboardError::Validation(format!(
                "unknown task priority '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for TaskPriority {
    type Error = TaskboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Reference to a team member as shown on a task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Assignee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<Assignee>,
    pub due_date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Discussion thread, oldest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Task {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self::with_id(Uuid::new_v4(), title, status)
    }

    pub fn with_id(id: TaskId, title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            assignee: None,
            due_date: None,
            priority: TaskPriority::Medium,
            status,
            comments: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_assignee(mut self, assignee: Assignee) -> Self {
        self.assignee = Some(assignee);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today)
    }

    /// Description excerpt as rendered on a board card.
    pub fn summary(&self) -> Option<String> {
        self.description.as_deref().map(|description| {
            if description.chars().count() > SUMMARY_LENGTH {
                let excerpt: String = description.chars().take(SUMMARY_LENGTH).collect();
                format!("{}...", excerpt)
            } else {
                description.to_string()
            }
        })
    }

    /// Applies an edit and reports whether any field changed. Status is not
    /// part of an edit; placement only changes through moves.
    pub fn apply_update(&mut self, update: TaskUpdate) -> bool {
        let mut changed = false;
        if let Some(title) = update.title {
            changed |= self.title != title;
            self.title = title;
        }
        changed |= update.description.write(&mut self.description);
        changed |= update.assignee.write(&mut self.assignee);
        changed |= update.due_date.write(&mut self.due_date);
        if let Some(priority) = update.priority {
            changed |= self.priority != priority;
            self.priority = priority;
        }
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    /// Trims `text`; blank comments are rejected.
    pub fn new(author: impl Into<String>, text: &str) -> Result<Self, TaskboardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskboardError::Validation(
                "comment cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            author: author.into(),
            text: text.to_string(),
            posted_at: Utc::now(),
        })
    }
}

/// Edit to one optional task field.
///
/// In a JSON edit payload an absent key is `Keep`, `null` is `Clear`, and any
/// other value is `Set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Keep,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T: PartialEq> FieldUpdate<T> {
    /// Writes the edit into `slot`, returning true if the stored value changed.
    pub fn write(self, slot: &mut Option<T>) -> bool {
        match self {
            Self::Keep => false,
            Self::Clear => slot.take().is_some(),
            Self::Set(value) => {
                let changed = slot.as_ref() != Some(&value);
                *slot = Some(value);
                changed
            }
        }
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        })
    }
}

/// Partial edit of a task's content fields, as sent by the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub assignee: FieldUpdate<Assignee>,
    #[serde(alias = "due_date")]
    pub due_date: FieldUpdate<NaiveDate>,
    pub priority: Option<TaskPriority>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_keep()
            && self.assignee.is_keep()
            && self.due_date.is_keep()
            && self.priority.is_none()
    }
}
