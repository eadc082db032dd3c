mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventry_core::config::AppConfig;
use eventry_core::{AppContext, EventFilter, EventKind, PollScope};

#[derive(Parser)]
#[command(name = "eventry")]
#[command(about = "Browse your mini-app's events and polls, star events, vote, and manage content")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events (upcoming by default)
    Events {
        /// Show past events instead of upcoming ones
        #[arg(long, conflicts_with = "all")]
        past: bool,

        /// Show every event (admin)
        #[arg(long)]
        all: bool,

        /// Only show starred events
        #[arg(long)]
        saved: bool,

        /// Match against title, description and location
        #[arg(short, long)]
        search: Option<String>,

        /// Calendar month of the event date (1-12)
        #[arg(short, long)]
        month: Option<u32>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Toggle the star on an event
    Save { event_id: i64 },
    /// List polls (open ones by default)
    Polls {
        /// Include closed polls (admin)
        #[arg(long)]
        all: bool,
    },
    /// Vote for an option in an open poll
    Vote { poll_id: i64, option_id: i64 },
    /// Create an event (admin)
    New {
        title: String,

        #[arg(short, long)]
        description: String,

        /// Event date (YYYY-MM-DD, YYYY-MM-DDTHH:MM, or RFC 3339)
        #[arg(long)]
        date: String,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        category: Option<String>,
    },
    /// Edit an event; omitted fields keep their current value (admin)
    Edit {
        event_id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete an event (admin)
    Delete {
        event_id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create a poll with at least two options (admin)
    PollNew {
        title: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// When voting closes (YYYY-MM-DD, YYYY-MM-DDTHH:MM, or RFC 3339)
        #[arg(long)]
        ends: String,

        /// An answer option; pass at least twice
        #[arg(short, long = "option")]
        options: Vec<String>,
    },
    /// Edit a poll; omitted fields keep their current value (admin)
    PollEdit {
        poll_id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(long)]
        ends: Option<String>,

        /// Replace the option list; pass at least twice to replace
        #[arg(short, long = "option")]
        options: Vec<String>,
    },
    /// Delete a poll (admin)
    PollDelete {
        poll_id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Dashboard counters (admin)
    Stats,
    /// User activity list (admin)
    Users,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let mut ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Events {
            past,
            all,
            saved,
            search,
            month,
            category,
        } => {
            let kind = if all {
                EventKind::All
            } else if past {
                EventKind::Past
            } else {
                EventKind::Upcoming
            };
            let filter = EventFilter {
                query: search,
                month,
                category,
            };
            commands::events::run(&mut ctx, kind, filter, saved).await
        }
        Commands::Save { event_id } => commands::save::run(&mut ctx, event_id),
        Commands::Polls { all } => {
            let scope = if all { PollScope::All } else { PollScope::Active };
            commands::polls::run(&mut ctx, scope).await
        }
        Commands::Vote { poll_id, option_id } => {
            commands::vote::run(&mut ctx, poll_id, option_id).await
        }
        Commands::New {
            title,
            description,
            date,
            location,
            category,
        } => commands::new::run(&mut ctx, title, description, &date, location, category).await,
        Commands::Edit {
            event_id,
            title,
            description,
            date,
            location,
            category,
        } => {
            commands::edit::run(
                &mut ctx,
                event_id,
                title,
                description,
                date.as_deref(),
                location,
                category,
            )
            .await
        }
        Commands::Delete { event_id, yes } => commands::delete::run(&mut ctx, event_id, yes).await,
        Commands::PollNew {
            title,
            description,
            ends,
            options,
        } => commands::poll::run_new(&mut ctx, title, description, &ends, options).await,
        Commands::PollEdit {
            poll_id,
            title,
            description,
            ends,
            options,
        } => {
            commands::poll::run_edit(
                &mut ctx,
                poll_id,
                title,
                description,
                ends.as_deref(),
                options,
            )
            .await
        }
        Commands::PollDelete { poll_id, yes } => {
            commands::poll::run_delete(&mut ctx, poll_id, yes).await
        }
        Commands::Stats => commands::admin::run_stats(&mut ctx).await,
        Commands::Users => commands::admin::run_users(&mut ctx).await,
    }
}
