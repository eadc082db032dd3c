//! Identity and admin-dashboard payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The mini-app user as handed over by the hosting platform.
///
/// Forwarded verbatim to `verify_admin`; the client never inspects or
/// validates it (the signed init payload is the server's concern).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

/// One row of the admin user dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    /// Active within the server's recency window (5 minutes).
    #[serde(default)]
    pub is_active: bool,
}

/// Aggregate counters for the admin dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub events: EventStats,
    pub polls: PollStats,
    pub users: UserStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventStats {
    pub total: u64,
    pub upcoming: u64,
    pub past: u64,
    /// (category, count) pairs; `None` groups uncategorized events.
    #[serde(default)]
    pub by_category: Vec<(Option<String>, u64)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollStats {
    pub total: u64,
    pub active: u64,
    pub completed: u64,
    pub total_votes: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub active_today: u64,
    pub new_this_week: u64,
}
