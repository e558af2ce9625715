use crate::cli::BoardArgs;
use crate::context::CliContext;
use crate::output;
use taskboard_core::TaskboardError;
use taskboard_domain::search::{CompositeSearcher, TaskSearcher};
use taskboard_domain::{seed, TaskFilters, TaskView};
use uuid::Uuid;

pub fn handle(ctx: &CliContext, args: BoardArgs) -> anyhow::Result<()> {
    if !args.is_filtered() {
        output::output_success(ctx.board.snapshot());
        return Ok(());
    }

    let filters = TaskFilters {
        status: args.status,
        priority: args.priority,
        assignee: args.assignee,
        overdue_only: args.overdue,
    };
    let filter = filters.into_filter(ctx.today);
    let searcher: Box<dyn TaskSearcher> = match args.search {
        Some(query) => Box::new(CompositeSearcher::all(query)),
        None => Box::new(CompositeSearcher::new()),
    };

    let tasks: Vec<TaskView> = ctx.board.tasks_matching(&filter, searcher.as_ref());
    output::output_list(tasks);
    Ok(())
}

pub fn handle_progress(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_success(serde_json::json!({
        "project": seed::PROJECT_NAME,
        "progress": ctx.board.progress(),
    }));
    Ok(())
}

pub fn handle_show(ctx: &CliContext, id: Uuid) -> anyhow::Result<()> {
    let task = ctx
        .board
        .task(id)
        .ok_or_else(|| TaskboardError::NotFound(format!("task {}", id)))?;
    output::output_success(serde_json::json!({
        "task": task,
        "overdue": task.is_overdue(ctx.today),
    }));
    Ok(())
}
