use anyhow::Result;
use eventry_core::{AppContext, NewEvent};
use owo_colors::OwoColorize;

/// Fetch the event, overlay the provided fields and send the full record
/// back (the update endpoint replaces, it does not patch).
pub async fn run(
    ctx: &mut AppContext,
    event_id: i64,
    title: Option<String>,
    description: Option<String>,
    date: Option<&str>,
    location: Option<String>,
    category: Option<String>,
) -> Result<()> {
    super::require_admin(ctx).await?;

    let current = ctx.client.get_event(event_id).await?;

    let event = NewEvent {
        title: title.unwrap_or(current.title),
        description: description.unwrap_or(current.description),
        date: match date {
            Some(s) => super::parse_instant(s)?,
            None => current.date,
        },
        location: location.or(current.location),
        category: category.or(current.category),
        created_by: current.created_by,
    };

    let updated = ctx.client.update_event(event_id, &event).await?;
    println!(
        "{} event {} - {}",
        "Updated".green(),
        updated.id,
        updated.title.bold()
    );
    Ok(())
}
