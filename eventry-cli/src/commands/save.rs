use anyhow::Result;
use eventry_core::AppContext;
use owo_colors::OwoColorize;

/// Toggle the star on an event. Works offline: the set lives on this
/// device and is persisted before we return.
pub fn run(ctx: &mut AppContext, event_id: i64) -> Result<()> {
    let saved = ctx.events.toggle_saved(event_id)?;

    if saved {
        println!("{} Event {} saved", "★".yellow(), event_id);
    } else {
        println!("Event {} removed from saved", event_id);
    }

    Ok(())
}
