pub mod board;
pub mod column;
pub mod drag;
pub mod filter;
pub mod record;
pub mod search;
pub mod seed;
pub mod session;
pub mod snapshot;
pub mod task;
pub mod team;

pub use board::{Board, MoveOutcome};
pub use column::Column;
pub use drag::{DragController, DragEffect, DragEvent, DragSession, DropHint, TaskMover};
pub use filter::{TaskFilter, TaskFilters};
pub use record::{load_task_file, parse_task_list, TaskRecord};
pub use search::{CompositeSearcher, SearchBy, TaskSearcher};
pub use session::{Role, SessionManager, User};
pub use snapshot::{BoardSnapshot, ColumnSnapshot, Progress, TaskView};
pub use task::{Assignee, Comment, FieldUpdate, Task, TaskId, TaskPriority, TaskStatus, TaskUpdate};
pub use team::Member;
