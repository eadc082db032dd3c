use anyhow::Result;
use eventry_core::{AppContext, PollScope};
use owo_colors::OwoColorize;

use crate::render;

pub async fn run(ctx: &mut AppContext, scope: PollScope) -> Result<()> {
    if scope == PollScope::All {
        super::require_admin(ctx).await?;
    }

    ctx.refresh_polls(scope).await?;

    if ctx.polls.polls().is_empty() {
        println!("{}", "No polls found".dimmed());
        return Ok(());
    }

    for poll in ctx.polls.polls() {
        render::poll(poll);
        println!();
    }

    Ok(())
}
