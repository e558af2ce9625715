use crate::cli::DragArgs;
use crate::context::CliContext;
use crate::output;
use serde::Serialize;
use std::path::Path;
use taskboard_domain::{DragEffect, DragEvent};

#[derive(Serialize)]
struct ReplayStep {
    index: usize,
    event: DragEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    effect: Option<DragEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn handle(ctx: &mut CliContext, args: DragArgs) -> anyhow::Result<()> {
    let mut effects = vec![ctx.dispatch(DragEvent::DragStart {
        task_id: args.task,
        status: args.from,
    })?];

    let finish = match args.drop {
        Some(status) if !args.cancel => DragEvent::Drop { status },
        _ => DragEvent::Cancel,
    };
    effects.push(ctx.dispatch(finish)?);

    output::output_success(serde_json::json!({
        "effects": effects,
        "board": ctx.board.snapshot(),
    }));
    Ok(())
}

/// Applies every event in order. A failed drop is recorded and the replay continues.
pub fn handle_replay(ctx: &mut CliContext, file: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)?;
    let events: Vec<DragEvent> = serde_json::from_str(&content)?;

    let mut steps = Vec::with_capacity(events.len());
    for (index, event) in events.into_iter().enumerate() {
        let step = match ctx.dispatch(event) {
            Ok(effect) => ReplayStep {
                index,
                event,
                effect: Some(effect),
                error: None,
            },
            Err(e) => {
                tracing::warn!("Replay step {} failed: {}", index, e);
                ReplayStep {
                    index,
                    event,
                    effect: None,
                    error: Some(e.to_string()),
                }
            }
        };
        steps.push(step);
    }

    output::output_success(serde_json::json!({
        "steps": steps,
        "board": ctx.board.snapshot(),
    }));
    Ok(())
}
