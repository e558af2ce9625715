use crate::cli::{TaskAddArgs, TaskEditArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_core::TaskboardError;
use taskboard_domain::{Comment, FieldUpdate, Task, TaskStatus, TaskUpdate, TaskView};
use uuid::Uuid;

pub fn handle_move(
    ctx: &mut CliContext,
    id: Uuid,
    from: TaskStatus,
    to: TaskStatus,
) -> anyhow::Result<()> {
    let outcome = ctx.board.move_task(id, from, to)?;
    output::output_success(serde_json::json!({
        "outcome": outcome,
        "board": ctx.board.snapshot(),
    }));
    Ok(())
}

pub fn handle_add(ctx: &mut CliContext, args: TaskAddArgs) -> anyhow::Result<()> {
    ctx.require_admin("Adding a task")?;

    let mut task = Task::new(args.title, args.status);
    if let Some(priority) = args.priority {
        task = task.with_priority(priority);
    }
    if let Some(description) = args.description {
        task = task.with_description(description);
    }
    if let Some(due_date) = args.due_date {
        task = task.with_due_date(due_date);
    }
    if let Some(member_id) = args.assignee {
        task = task.with_assignee(ctx.find_member(&member_id)?.as_assignee());
    }

    let view = TaskView::from(&task);
    ctx.board.add_task(task)?;
    tracing::info!("Added task: {} (id: {})", view.title, view.id);
    output::output_success(view);
    Ok(())
}

fn build_task_update(ctx: &CliContext, args: &TaskEditArgs) -> anyhow::Result<TaskUpdate> {
    if let Some(patch) = &args.patch {
        let update: TaskUpdate = serde_json::from_str(patch)
            .map_err(|e| TaskboardError::Serialization(format!("invalid edit payload: {}", e)))?;
        return Ok(update);
    }

    let description = match (&args.description, args.clear_description) {
        (Some(text), _) => FieldUpdate::Set(text.clone()),
        (None, true) => FieldUpdate::Clear,
        (None, false) => FieldUpdate::Keep,
    };
    let due_date = match (args.due_date, args.clear_due_date) {
        (Some(date), _) => FieldUpdate::Set(date),
        (None, true) => FieldUpdate::Clear,
        (None, false) => FieldUpdate::Keep,
    };
    let assignee = match (&args.assignee, args.unassign) {
        (Some(member_id), _) => FieldUpdate::Set(ctx.find_member(member_id)?.as_assignee()),
        (None, true) => FieldUpdate::Clear,
        (None, false) => FieldUpdate::Keep,
    };

    Ok(TaskUpdate {
        title: args.title.clone(),
        description,
        assignee,
        due_date,
        priority: args.priority,
    })
}

pub fn handle_edit(ctx: &mut CliContext, args: TaskEditArgs) -> anyhow::Result<()> {
    ctx.require_admin("Editing a task")?;

    let updates = build_task_update(ctx, &args)?;
    if updates.is_empty() {
        return Err(TaskboardError::Validation("nothing to update".to_string()).into());
    }
    let task = ctx.board.update_task(args.task, updates)?;
    output::output_success(TaskView::from(task));
    Ok(())
}

pub fn handle_remove(ctx: &mut CliContext, id: Uuid) -> anyhow::Result<()> {
    ctx.require_admin("Deleting a task")?;

    let removed = ctx.board.remove_task(id)?;
    tracing::info!("Removed task: {} (id: {})", removed.title, removed.id);
    output::output_success(serde_json::json!({
        "removed": id.to_string(),
        "board": ctx.board.snapshot(),
    }));
    Ok(())
}

pub fn handle_comment(ctx: &mut CliContext, id: Uuid, text: &str) -> anyhow::Result<()> {
    let author = ctx.session.require_user("Commenting")?.name.clone();
    let task = ctx.board.add_comment(id, Comment::new(author, text)?)?;
    output::output_success(serde_json::json!({
        "task_id": task.id,
        "comments": task.comments,
    }));
    Ok(())
}
