use anyhow::Result;
use dialoguer::Confirm;
use eventry_core::AppContext;
use owo_colors::OwoColorize;

pub async fn run(ctx: &mut AppContext, event_id: i64, yes: bool) -> Result<()> {
    super::require_admin(ctx).await?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete event {}?", event_id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    ctx.client.delete_event(event_id).await?;
    println!("{} event {}", "Deleted".red(), event_id);
    Ok(())
}
