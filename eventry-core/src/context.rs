//! The application context: one owned struct instead of the scattered
//! module-level globals of a typical mini-app script.
//!
//! Built once at startup, mutated only through store operations, dropped at
//! session end. All mutation happens on the caller's single logical thread;
//! suspension points are exactly the network calls in `SyncClient`.

use crate::admin::TelegramUser;
use crate::client::SyncClient;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::event::EventKind;
use crate::poll::{Poll, PollScope};
use crate::store::{EventStore, PollStore, SavedEvents};

pub struct AppContext {
    pub client: SyncClient,
    pub events: EventStore,
    pub polls: PollStore,
    config: AppConfig,
    /// Verified once per session, then cached. A revocation on the server
    /// is not seen until the next session.
    admin: Option<bool>,
}

impl AppContext {
    /// Build a context from config, loading the saved-events set from its
    /// default on-device location.
    pub fn new(config: AppConfig) -> Result<Self> {
        let saved = SavedEvents::load_default()?;
        Ok(Self::with_saved(config, saved))
    }

    pub fn with_saved(config: AppConfig, saved: SavedEvents) -> Self {
        AppContext {
            client: SyncClient::new(config.server_url.clone()),
            events: EventStore::new(saved),
            polls: PollStore::new(),
            config,
            admin: None,
        }
    }

    /// Fetch `kind` and swap the event cache. On failure the previous
    /// snapshot stays in place.
    pub async fn refresh_events(&mut self, kind: EventKind) -> Result<usize> {
        let events = self.client.list_events(kind).await?;
        let count = events.len();
        self.events.replace(events);
        Ok(count)
    }

    /// Fetch `scope` and swap the poll cache. On failure the previous
    /// snapshot stays in place.
    pub async fn refresh_polls(&mut self, scope: PollScope) -> Result<usize> {
        let polls = self.client.list_polls(scope).await?;
        let count = polls.len();
        self.polls.replace(polls);
        Ok(count)
    }

    /// Cast a vote: validate against the cache, bump optimistically,
    /// dispatch, then reconcile with the server's copy - or roll the bump
    /// back if the request failed.
    pub async fn vote(&mut self, poll_id: i64, option_id: i64) -> Result<Poll> {
        let index = self.polls.prepare_vote(poll_id, option_id)?;

        self.polls.apply_vote(poll_id, index);

        match self.client.vote(poll_id, index).await {
            Ok(poll) => {
                self.polls.reconcile(poll.clone());
                Ok(poll)
            }
            Err(e) => {
                self.polls.revert_vote(poll_id, index);
                Err(e)
            }
        }
    }

    /// Whether the session user is an admin. The first call hits
    /// `/api/verify_admin`; every later call returns the cached verdict.
    pub async fn ensure_admin(&mut self) -> Result<bool> {
        if let Some(verdict) = self.admin {
            return Ok(verdict);
        }

        let (init_data, user) = self.identity()?;
        let verdict = self.client.verify_admin(&init_data, &user).await?;
        self.admin = Some(verdict);
        Ok(verdict)
    }

    fn identity(&self) -> Result<(String, TelegramUser)> {
        let init_data = self.config.init_data.clone().ok_or_else(|| {
            Error::Config("No init_data configured; admin operations need one".into())
        })?;
        let user = self
            .config
            .user
            .clone()
            .ok_or_else(|| Error::Config("No user configured; admin operations need one".into()))?;
        Ok((init_data, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn admin_check_without_identity_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let saved = SavedEvents::load(dir.path().join("saved.json")).unwrap();
        let mut ctx = AppContext::with_saved(AppConfig::default(), saved);

        match ctx.ensure_admin().await {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn vote_on_closed_cached_poll_is_a_conflict() {
        use crate::poll::{Poll, PollOption};
        use chrono::{Duration, Utc};

        let dir = tempfile::tempdir().unwrap();
        let saved = SavedEvents::load(dir.path().join("saved.json")).unwrap();
        let mut ctx = AppContext::with_saved(AppConfig::default(), saved);

        ctx.polls.reconcile(Poll {
            id: 1,
            title: "Ended".to_string(),
            description: String::new(),
            end_date: Utc::now() - Duration::hours(1),
            options: vec![PollOption {
                id: 10,
                text: "A".to_string(),
                votes: 3,
            }],
            created_by: None,
        });

        // Rejected before any dispatch, and the count is untouched.
        match ctx.vote(1, 10).await {
            Err(Error::Conflict(_)) => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
        assert_eq!(ctx.polls.get(1).unwrap().options[0].votes, 3);
    }

    #[tokio::test]
    async fn vote_on_uncached_poll_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let saved = SavedEvents::load(dir.path().join("saved.json")).unwrap();
        let mut ctx = AppContext::with_saved(AppConfig::default(), saved);

        match ctx.vote(1, 1).await {
            Err(Error::NotFound(_)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert!(ctx.polls.polls().is_empty());
    }
}
