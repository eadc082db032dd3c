//! Terminal output for events, polls and the admin dashboards.

use chrono::{DateTime, Local, Utc};
use eventry_core::admin::{Stats, UserInfo};
use eventry_core::{Event, EventStore, Poll};
use owo_colors::OwoColorize;

const BAR_WIDTH: usize = 20;

/// Print events grouped by day, in the order they arrived.
pub fn event_list(events: &[&Event], store: &EventStore) {
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return;
    }

    let mut current_date: Option<String> = None;

    for event in events {
        let date_label = format_date_label(&event.date);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        let time = event.date.with_timezone(&Local).format("%H:%M");
        let star = if store.is_saved(event.id) { "★" } else { " " };

        print!("  {} {} #{} {}", time, star.yellow(), event.id, event.title);
        if let Some(category) = &event.category {
            print!(" {}", format!("[{}]", category).dimmed());
        }
        if let Some(location) = &event.location {
            print!(" {}", format!("@ {}", location).dimmed());
        }
        println!();
    }
}

/// Print one poll: title, open/closed state and per-option result bars.
pub fn poll(poll: &Poll) {
    let closes = poll
        .end_date
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M");

    print!("{} #{} {}", "Poll".bold(), poll.id, poll.title.bold());
    if poll.is_open() {
        println!(" {}", format!("(closes {})", closes).dimmed());
    } else {
        println!(" {}", format!("(closed {})", closes).red());
    }

    if !poll.description.is_empty() {
        println!("  {}", poll.description.dimmed());
    }

    for option in &poll.options {
        let pct = poll.percentage(option);
        println!(
            "  {} {} {:>5.1}% ({}) {}",
            format!("#{}", option.id).dimmed(),
            bar(pct),
            pct,
            option.votes,
            option.text
        );
    }
}

pub fn stats(stats: &Stats) {
    println!("{}", "Events".bold());
    println!("  total: {}", stats.events.total);
    println!("  upcoming: {}", stats.events.upcoming);
    println!("  past: {}", stats.events.past);
    for (category, count) in &stats.events.by_category {
        let label = category.as_deref().unwrap_or("(uncategorized)");
        println!("  {} {}", format!("{}:", label).dimmed(), count);
    }

    println!("\n{}", "Polls".bold());
    println!("  total: {}", stats.polls.total);
    println!("  active: {}", stats.polls.active);
    println!("  completed: {}", stats.polls.completed);
    println!("  votes cast: {}", stats.polls.total_votes);

    println!("\n{}", "Users".bold());
    println!("  total: {}", stats.users.total);
    println!("  active today: {}", stats.users.active_today);
    println!("  new this week: {}", stats.users.new_this_week);
}

pub fn users(users: &[UserInfo]) {
    if users.is_empty() {
        println!("{}", "No users found".dimmed());
        return;
    }

    for user in users {
        let dot = if user.is_active {
            "●".green().to_string()
        } else {
            "●".dimmed().to_string()
        };
        let name = user.username.as_deref().unwrap_or("(no username)");
        let last_active = match &user.last_active {
            Some(t) => format!(
                "last active {}",
                t.with_timezone(&Local).format("%Y-%m-%d %H:%M")
            ),
            None => "never active".to_string(),
        };
        println!("{} {} #{} {}", dot, name.bold(), user.id, last_active.dimmed());
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(time: &DateTime<Utc>) -> String {
    let today = Local::now().date_naive();
    let date = time.with_timezone(&Local).date_naive();

    let diff = (date - today).num_days();
    match diff {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d %Y").to_string(),
    }
}

fn bar(pct: f64) -> String {
    let filled = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
