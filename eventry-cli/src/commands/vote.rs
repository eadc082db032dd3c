use anyhow::Result;
use eventry_core::{AppContext, PollScope};
use owo_colors::OwoColorize;

use crate::render;

/// Cast a vote. The local count is bumped before the request goes out and
/// rolled back by the context if the request fails; on success we print the
/// server's reconciled counts.
pub async fn run(ctx: &mut AppContext, poll_id: i64, option_id: i64) -> Result<()> {
    ctx.refresh_polls(PollScope::Active).await?;

    // The active list omits closed polls; fetch the poll itself so a vote
    // on a closed one is reported as a conflict, not as unknown.
    if ctx.polls.get(poll_id).is_none() {
        let poll = ctx.client.get_poll(poll_id).await?;
        ctx.polls.reconcile(poll);
    }

    let poll = ctx.vote(poll_id, option_id).await?;

    println!("{}", "Vote recorded".green());
    render::poll(&poll);
    Ok(())
}
