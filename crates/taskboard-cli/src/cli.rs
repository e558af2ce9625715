use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::{TaskPriority, TaskStatus};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Kanban board for the Website Redesign dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON task list to load instead of the built-in board (or set TASKBOARD_TASKS)
    #[arg(long, global = true, value_name = "FILE", env = "TASKBOARD_TASKS")]
    pub tasks: Option<PathBuf>,

    /// Sign in as this account before running the command
    #[arg(long, global = true, env = "TASKBOARD_EMAIL")]
    pub email: Option<String>,

    #[arg(long, global = true, env = "TASKBOARD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Reference date for overdue checks (defaults to the local date)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board, optionally filtered
    Board(BoardArgs),
    /// Move a task between columns
    Move {
        #[arg(long)]
        task: Uuid,
        #[arg(long)]
        from: TaskStatus,
        #[arg(long)]
        to: TaskStatus,
    },
    /// Perform a single drag gesture
    Drag(DragArgs),
    /// Replay a JSON array of drag events
    Replay {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Add a task (admin only)
    Add(TaskAddArgs),
    /// Edit a task's content (admin only)
    Edit(TaskEditArgs),
    /// Delete a task (admin only)
    Remove {
        #[arg(long)]
        task: Uuid,
    },
    /// Comment on a task (signed-in users)
    Comment {
        #[arg(long)]
        task: Uuid,
        #[arg(long)]
        text: String,
    },
    /// Completion summary for the board
    Progress,
    /// Show a single task
    Show {
        #[arg(long)]
        task: Uuid,
    },
    /// List or search the team directory
    Team {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the signed-in user
    Whoami,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct BoardArgs {
    #[arg(long)]
    pub status: Option<TaskStatus>,
    #[arg(long)]
    pub priority: Option<TaskPriority>,
    /// Assignee name (substring, case-insensitive)
    #[arg(long)]
    pub assignee: Option<String>,
    /// Only tasks past their due date
    #[arg(long)]
    pub overdue: bool,
    /// Free-text search over title, description, and assignee
    #[arg(long)]
    pub search: Option<String>,
}

impl BoardArgs {
    pub fn is_filtered(&self) -> bool {
        self.status.is_some()
            || self.priority.is_some()
            || self.assignee.is_some()
            || self.overdue
            || self.search.is_some()
    }
}

#[derive(Args)]
pub struct DragArgs {
    #[arg(long)]
    pub task: Uuid,
    /// Column the task is picked up from
    #[arg(long)]
    pub from: TaskStatus,
    /// Column to drop onto
    #[arg(long, conflicts_with = "cancel", required_unless_present = "cancel")]
    pub drop: Option<TaskStatus>,
    /// Abort the gesture instead of dropping
    #[arg(long)]
    pub cancel: bool,
}

#[derive(Args)]
pub struct TaskAddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "todo")]
    pub status: TaskStatus,
    #[arg(long)]
    pub priority: Option<TaskPriority>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub due_date: Option<NaiveDate>,
    /// Team member id to assign
    #[arg(long)]
    pub assignee: Option<String>,
}

#[derive(Args)]
pub struct TaskEditArgs {
    #[arg(long)]
    pub task: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long)]
    pub priority: Option<TaskPriority>,
    #[arg(long, value_name = "YYYY-MM-DD", conflicts_with = "clear_due_date")]
    pub due_date: Option<NaiveDate>,
    #[arg(long)]
    pub clear_due_date: bool,
    /// Team member id to assign
    #[arg(long, conflicts_with = "unassign")]
    pub assignee: Option<String>,
    #[arg(long)]
    pub unassign: bool,
    /// JSON edit payload, e.g. '{"dueDate": null}'; an absent key keeps the field
    #[arg(
        long,
        value_name = "JSON",
        conflicts_with_all = [
            "title",
            "description",
            "clear_description",
            "priority",
            "due_date",
            "clear_due_date",
            "assignee",
            "unassign",
        ]
    )]
    pub patch: Option<String>,
}
