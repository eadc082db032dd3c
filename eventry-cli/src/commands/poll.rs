//! Admin poll management: poll-new, poll-edit, poll-delete.

use anyhow::Result;
use dialoguer::Confirm;
use eventry_core::{AppContext, NewPoll};
use owo_colors::OwoColorize;

use crate::render;

pub async fn run_new(
    ctx: &mut AppContext,
    title: String,
    description: String,
    ends: &str,
    options: Vec<String>,
) -> Result<()> {
    super::require_admin(ctx).await?;

    let poll = NewPoll {
        title,
        description,
        end_date: super::parse_instant(ends)?,
        options,
    };

    // create_poll validates the two-option minimum before dispatching.
    let created = ctx.client.create_poll(&poll).await?;
    println!("{} poll {}", "Created".green(), created.id);
    render::poll(&created);
    Ok(())
}

/// Overlay the provided fields onto the current poll and send the full
/// record back. Passing any --option replaces the whole option list, which
/// resets counts for renamed options on the server.
pub async fn run_edit(
    ctx: &mut AppContext,
    poll_id: i64,
    title: Option<String>,
    description: Option<String>,
    ends: Option<&str>,
    options: Vec<String>,
) -> Result<()> {
    super::require_admin(ctx).await?;

    let current = ctx.client.get_poll(poll_id).await?;

    let poll = NewPoll {
        title: title.unwrap_or(current.title),
        description: description.unwrap_or(current.description),
        end_date: match ends {
            Some(s) => super::parse_instant(s)?,
            None => current.end_date,
        },
        options: if options.is_empty() {
            current.options.into_iter().map(|o| o.text).collect()
        } else {
            options
        },
    };

    let updated = ctx.client.update_poll(poll_id, &poll).await?;
    println!("{} poll {}", "Updated".green(), updated.id);
    render::poll(&updated);
    Ok(())
}

pub async fn run_delete(ctx: &mut AppContext, poll_id: i64, yes: bool) -> Result<()> {
    super::require_admin(ctx).await?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete poll {} and all its votes?", poll_id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    ctx.client.delete_poll(poll_id).await?;
    println!("{} poll {}", "Deleted".red(), poll_id);
    Ok(())
}
