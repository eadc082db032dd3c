//! Admin dashboards: stats and users.

use anyhow::Result;
use eventry_core::AppContext;

use crate::render;

pub async fn run_stats(ctx: &mut AppContext) -> Result<()> {
    super::require_admin(ctx).await?;

    let stats = ctx.client.stats().await?;
    render::stats(&stats);
    Ok(())
}

pub async fn run_users(ctx: &mut AppContext) -> Result<()> {
    super::require_admin(ctx).await?;

    let users = ctx.client.list_users().await?;
    render::users(&users);
    Ok(())
}
