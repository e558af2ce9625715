use crate::context::CliContext;
use crate::output;
use taskboard_domain::team::search_members;

pub fn handle(ctx: &CliContext, search: Option<String>) -> anyhow::Result<()> {
    let members = search_members(&ctx.team, search.as_deref().unwrap_or_default());
    output::output_list(members);
    Ok(())
}

pub fn handle_whoami(ctx: &CliContext) -> anyhow::Result<()> {
    output::output_success(serde_json::json!({
        "user": ctx.session.current_user(),
        "is_admin": ctx.session.is_admin(),
    }));
    Ok(())
}
