//! Server-neutral event types.
//!
//! These types mirror the event records served by the mini-app backend.
//! The client works exclusively with them for listing, filtering and the
//! saved-events set; the cached list is a point-in-time snapshot, never
//! authoritative.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An event as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned, immutable once created.
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Telegram id of the admin who created the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
}

/// Which slice of the event list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Upcoming,
    Past,
    /// Full list, admin-only on the server.
    All,
}

impl EventKind {
    /// Value of the `type` query parameter; `All` has none, it is served
    /// from its own path.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            EventKind::Upcoming => Some("upcoming"),
            EventKind::Past => Some("past"),
            EventKind::All => None,
        }
    }
}

/// Payload for creating or replacing an event.
#[derive(Debug, Clone, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    /// Always on the wire (as null when absent): the update endpoint reads
    /// the key unconditionally.
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
}

impl NewEvent {
    /// Checks required fields before any network dispatch.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Event title must not be empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(
                "Event description must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Client-side event list filter.
///
/// All provided predicates are ANDed; absent predicates pass everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring match against title, description and
    /// location. An event without a location never matches on location.
    pub query: Option<String>,
    /// Calendar month of the event date (1-12).
    pub month: Option<u32>,
    /// Exact category match.
    pub category: Option<String>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.month.is_none() && self.category.is_none()
    }

    pub fn matches(&self, event: &Event) -> bool {
        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            let hit = event.title.to_lowercase().contains(&needle)
                || event.description.to_lowercase().contains(&needle)
                || event
                    .location
                    .as_ref()
                    .is_some_and(|l| l.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }

        if let Some(month) = self.month {
            if event.date.month() != month {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if event.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        true
    }
}
