use anyhow::Result;
use eventry_core::{AppContext, Event, EventFilter, EventKind};

use crate::render;

pub async fn run(
    ctx: &mut AppContext,
    kind: EventKind,
    filter: EventFilter,
    saved_only: bool,
) -> Result<()> {
    // The full list is admin-only on the server; check before fetching
    // so the user gets a clear message instead of a 403.
    if kind == EventKind::All {
        super::require_admin(ctx).await?;
    }

    ctx.refresh_events(kind).await?;

    let events: Vec<&Event> = if saved_only {
        ctx.events
            .saved_events()
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect()
    } else {
        ctx.events.filter(&filter)
    };

    render::event_list(&events, &ctx.events);
    Ok(())
}
