use anyhow::Result;
use eventry_core::{AppContext, NewEvent};
use owo_colors::OwoColorize;

pub async fn run(
    ctx: &mut AppContext,
    title: String,
    description: String,
    date: &str,
    location: Option<String>,
    category: Option<String>,
) -> Result<()> {
    super::require_admin(ctx).await?;

    let event = NewEvent {
        title,
        description,
        date: super::parse_instant(date)?,
        location,
        category,
        created_by: None,
    };

    let created = ctx.client.create_event(&event).await?;
    println!(
        "{} event {} - {}",
        "Created".green(),
        created.id,
        created.title.bold()
    );
    Ok(())
}
