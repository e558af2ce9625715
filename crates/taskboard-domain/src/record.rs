//! Loosely-typed task input from external data sources.
//!
//! Two JSON shapes are accepted:
//!
//! - a flat array of records, each carrying its own `status`;
//! - an object keyed by column (`"todo"`, `"inprogress"`, `"done"`), where
//!   the key supplies the status of every record under it.
//!
//! Conversion is strict: an unknown status or priority, a malformed date,
//! or an empty title fails the whole load rather than dropping the task.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use taskboard_core::{TaskboardError, TaskboardResult};
use uuid::Uuid;

use crate::task::{Assignee, Task, TaskPriority, TaskStatus};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    /// `YYYY-MM-DD`.
    #[serde(default, alias = "due_date")]
    pub due_date: Option<String>,
    /// Defaults to `Medium`.
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskboardError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(TaskboardError::Validation(
                "task title cannot be empty".to_string(),
            ));
        }
        let status: TaskStatus = record
            .status
            .as_deref()
            .ok_or_else(|| {
                TaskboardError::Validation(format!("task '{}' has no status", record.title))
            })?
            .parse()?;
        let priority = match record.priority.as_deref() {
            Some(priority) => priority.parse()?,
            None => TaskPriority::Medium,
        };
        let due_date = record
            .due_date
            .as_deref()
            .map(|date| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                    TaskboardError::Validation(format!("invalid due date '{}': {}", date, e))
                })
            })
            .transpose()?;

        Ok(Task {
            id: record.id.unwrap_or_else(Uuid::new_v4),
            title: record.title,
            description: record.description,
            assignee: record.assignee,
            due_date,
            priority,
            status,
            comments: Vec::new(),
        })
    }
}

fn grouped_records(
    groups: BTreeMap<String, Vec<TaskRecord>>,
) -> TaskboardResult<Vec<TaskRecord>> {
    let mut records = Vec::new();
    // Emit groups in column order so each column keeps its input order.
    let mut keyed: Vec<(TaskStatus, String, Vec<TaskRecord>)> = groups
        .into_iter()
        .map(|(key, group)| -> TaskboardResult<_> {
            Ok((key.parse::<TaskStatus>()?, key, group))
        })
        .collect::<TaskboardResult<_>>()?;
    keyed.sort_by_key(|(status, _, _)| *status);

    for (status, key, group) in keyed {
        for mut record in group {
            match record.status.clone() {
                None => record.status = Some(key.clone()),
                Some(own) => {
                    if own.parse::<TaskStatus>()? != status {
                        return Err(TaskboardError::Validation(format!(
                            "task '{}' has status '{}' but is listed under '{}'",
                            record.title, own, key
                        )));
                    }
                }
            }
            records.push(record);
        }
    }
    Ok(records)
}

fn serialization_error(e: serde_json::Error) -> TaskboardError {
    TaskboardError::Serialization(e.to_string())
}

/// Parses a flat array of records or an object of column-keyed arrays.
///
/// The shape is decided by the top-level JSON value, so a bad record reports
/// the field that failed rather than a generic shape mismatch.
pub fn parse_task_list(json: &str) -> TaskboardResult<Vec<Task>> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(serialization_error)?;
    let records = match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value::<Vec<TaskRecord>>(value).map_err(serialization_error)?
        }
        serde_json::Value::Object(_) => {
            let groups: BTreeMap<String, Vec<TaskRecord>> =
                serde_json::from_value(value).map_err(serialization_error)?;
            grouped_records(groups)?
        }
        _ => {
            return Err(TaskboardError::Serialization(
                "expected an array of tasks or an object keyed by column".to_string(),
            ));
        }
    };
    records.into_iter().map(Task::try_from).collect()
}

pub fn load_task_file(path: &Path) -> TaskboardResult<Vec<Task>> {
    let content = std::fs::read_to_string(path)?;
    let tasks = parse_task_list(&content)?;
    tracing::debug!(path = %path.display(), count = tasks.len(), "Loaded task file");
    Ok(tasks)
}
