//! Drag interaction controller.
//!
//! Turns a drag-start / drag-over / drop gesture into exactly one move on the
//! board. At most one gesture is in flight at a time; starting a new drag
//! replaces the open one. Drops that arrive without a drag start are ignored.

use serde::{Deserialize, Serialize};
use taskboard_core::TaskboardResult;

use crate::board::{Board, MoveOutcome};
use crate::task::{TaskId, TaskStatus};

/// Anything a drop can be applied to.
#[cfg_attr(test, mockall::automock)]
pub trait TaskMover {
    fn move_task(
        &mut self,
        task_id: TaskId,
        source: TaskStatus,
        destination: TaskStatus,
    ) -> TaskboardResult<MoveOutcome>;
}

impl TaskMover for Board {
    fn move_task(
        &mut self,
        task_id: TaskId,
        source: TaskStatus,
        destination: TaskStatus,
    ) -> TaskboardResult<MoveOutcome> {
        Board::move_task(self, task_id, source, destination)
    }
}

/// The task being dragged and the column it was picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragSession {
    pub task_id: TaskId,
    pub source: TaskStatus,
}

/// Advisory drop-target information for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropHint {
    pub task_id: TaskId,
    pub candidate: TaskStatus,
    /// False when hovering over the column the task came from.
    pub would_move: bool,
}

/// One pointer event, as a presentation layer would report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    DragStart { task_id: TaskId, status: TaskStatus },
    DragOver { status: TaskStatus },
    Drop { status: TaskStatus },
    Cancel,
}

/// What dispatching a `DragEvent` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Started {
        session: DragSession,
        replaced: Option<DragSession>,
    },
    Hovered {
        hint: Option<DropHint>,
    },
    Dropped {
        outcome: Option<MoveOutcome>,
    },
    Cancelled {
        session: Option<DragSession>,
    },
}

#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session, returning the one it replaced, if any.
    pub fn on_drag_start(&mut self, task_id: TaskId, source: TaskStatus) -> Option<DragSession> {
        let replaced = self.session.replace(DragSession { task_id, source });
        if let Some(old) = replaced {
            tracing::debug!(task_id = %old.task_id, "Replaced open drag session");
        }
        replaced
    }

    pub fn on_drag_over(&self, candidate: TaskStatus) -> Option<DropHint> {
        self.session.map(|session| DropHint {
            task_id: session.task_id,
            candidate,
            would_move: session.source != candidate,
        })
    }

    /// Applies the open gesture to `board`.
    ///
    /// Returns `Ok(None)` when no drag is open. The session is closed whether
    /// or not the move succeeds.
    pub fn on_drop<M>(
        &mut self,
        board: &mut M,
        destination: TaskStatus,
    ) -> TaskboardResult<Option<MoveOutcome>>
    where
        M: TaskMover + ?Sized,
    {
        let Some(session) = self.session.take() else {
            tracing::debug!(column = %destination, "Drop without drag start ignored");
            return Ok(None);
        };
        board
            .move_task(session.task_id, session.source, destination)
            .map(Some)
    }

    pub fn on_drag_cancel(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    pub fn dispatch<M>(&mut self, board: &mut M, event: DragEvent) -> TaskboardResult<DragEffect>
    where
        M: TaskMover + ?Sized,
    {
        let effect = match event {
            DragEvent::DragStart { task_id, status } => {
                let replaced = self.on_drag_start(task_id, status);
                DragEffect::Started {
                    session: DragSession {
                        task_id,
                        source: status,
                    },
                    replaced,
                }
            }
            DragEvent::DragOver { status } => DragEffect::Hovered {
                hint: self.on_drag_over(status),
            },
            DragEvent::Drop { status } => DragEffect::Dropped {
                outcome: self.on_drop(board, status)?,
            },
            DragEvent::Cancel => DragEffect::Cancelled {
                session: self.on_drag_cancel(),
            },
        };
        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use mockall::predicate::eq;
    use taskboard_core::TaskboardError;
    use uuid::Uuid;

    #[test]
    fn test_drop_calls_move_once_with_session_source() {
        let task_id = Uuid::new_v4();
        let mut mover = MockTaskMover::new();
        mover
            .expect_move_task()
            .with(eq(task_id), eq(TaskStatus::ToDo), eq(TaskStatus::Done))
            .times(1)
            .returning(|task_id, from, to| {
                Ok(MoveOutcome {
                    task_id,
                    from,
                    to,
                    moved: true,
                })
            });

        let mut controller = DragController::new();
        controller.on_drag_start(task_id, TaskStatus::ToDo);
        let outcome = controller.on_drop(&mut mover, TaskStatus::Done).unwrap();

        assert_eq!(outcome.map(|o| o.to), Some(TaskStatus::Done));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_drop_without_session_is_ignored() {
        let mut mover = MockTaskMover::new();
        mover.expect_move_task().never();

        let mut controller = DragController::new();
        let outcome = controller.on_drop(&mut mover, TaskStatus::Done).unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_failed_move_still_closes_session() {
        let mut mover = MockTaskMover::new();
        mover
            .expect_move_task()
            .times(1)
            .returning(|task_id, _, _| Err(TaskboardError::NotFound(task_id.to_string())));

        let mut controller = DragController::new();
        controller.on_drag_start(Uuid::new_v4(), TaskStatus::InProgress);
        let err = controller.on_drop(&mut mover, TaskStatus::Done).unwrap_err();

        assert!(err.is_not_found());
        assert!(controller.session().is_none());
    }

    #[test]
    fn test_cancel_never_moves() {
        let mut mover = MockTaskMover::new();
        mover.expect_move_task().never();

        let mut controller = DragController::new();
        let task_id = Uuid::new_v4();
        controller.on_drag_start(task_id, TaskStatus::ToDo);
        let cancelled = controller.on_drag_cancel();

        assert_eq!(cancelled.map(|s| s.task_id), Some(task_id));
        assert!(controller.on_drop(&mut mover, TaskStatus::Done).unwrap().is_none());
    }

    #[test]
    fn test_second_drag_start_replaces_session() {
        let (first, second) = (Uuid::new_v4(), Uuid::new_v4());
        let mut mover = MockTaskMover::new();
        mover
            .expect_move_task()
            .with(eq(second), eq(TaskStatus::InProgress), eq(TaskStatus::ToDo))
            .times(1)
            .returning(|task_id, from, to| {
                Ok(MoveOutcome {
                    task_id,
                    from,
                    to,
                    moved: true,
                })
            });

        let mut controller = DragController::new();
        assert!(controller.on_drag_start(first, TaskStatus::ToDo).is_none());
        let replaced = controller.on_drag_start(second, TaskStatus::InProgress);
        assert_eq!(replaced.map(|s| s.task_id), Some(first));

        controller.on_drop(&mut mover, TaskStatus::ToDo).unwrap();
    }

    #[test]
    fn test_drag_over_is_advisory() {
        let mut controller = DragController::new();
        assert!(controller.on_drag_over(TaskStatus::Done).is_none());

        let task_id = Uuid::new_v4();
        controller.on_drag_start(task_id, TaskStatus::ToDo);

        let hint = controller.on_drag_over(TaskStatus::Done).unwrap();
        assert!(hint.would_move);
        assert!(!controller.on_drag_over(TaskStatus::ToDo).unwrap().would_move);
        assert_eq!(controller.session().map(|s| s.source), Some(TaskStatus::ToDo));
    }

    #[test]
    fn test_dispatch_against_real_board() {
        let task = Task::new("Implement user authentication", TaskStatus::InProgress);
        let mut board = Board::initialize(vec![task.clone()]).unwrap();
        let mut controller = DragController::new();

        let events = [
            DragEvent::DragStart {
                task_id: task.id,
                status: TaskStatus::InProgress,
            },
            DragEvent::DragOver {
                status: TaskStatus::Done,
            },
            DragEvent::Drop {
                status: TaskStatus::Done,
            },
        ];
        let effects: Vec<_> = events
            .into_iter()
            .map(|event| controller.dispatch(&mut board, event).unwrap())
            .collect();

        assert!(matches!(
            effects[2],
            DragEffect::Dropped {
                outcome: Some(MoveOutcome { moved: true, .. })
            }
        ));
        assert_eq!(board.status_of(task.id), Some(TaskStatus::Done));
    }

    #[test]
    fn test_drag_event_json() {
        let task_id = Uuid::new_v4();
        let json = format!(r#"{{"event":"drag_start","task_id":"{}","status":"todo"}}"#, task_id);
        let event: DragEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            DragEvent::DragStart {
                task_id,
                status: TaskStatus::ToDo
            }
        );

        let event: DragEvent = serde_json::from_str(r#"{"event":"cancel"}"#).unwrap();
        assert_eq!(event, DragEvent::Cancel);
    }

    #[test]
    fn test_drag_event_accepts_any_status_spelling() {
        let cases = [
            ("in_progress", TaskStatus::InProgress),
            ("in progress", TaskStatus::InProgress),
            ("DONE", TaskStatus::Done),
            ("to do", TaskStatus::ToDo),
            ("to_do", TaskStatus::ToDo),
        ];
        for (spelling, expected) in cases {
            let json = format!(r#"{{"event":"drop","status":"{}"}}"#, spelling);
            let event: DragEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, DragEvent::Drop { status: expected }, "{}", spelling);
        }

        let err = serde_json::from_str::<DragEvent>(r#"{"event":"drop","status":"backlog"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown task status"));
    }
}
