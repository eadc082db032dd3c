//! Cached polls and optimistic vote bookkeeping.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::poll::Poll;

/// Holds the last-fetched poll list.
///
/// The vote path is the one deliberate exception to mutate-on-confirmed-
/// success: `apply_vote` bumps the local count before the network call so
/// the UI reflects the tap immediately, and the caller either reconciles
/// with the server's response or calls `revert_vote` on failure.
#[derive(Default)]
pub struct PollStore {
    polls: Vec<Poll>,
}

impl PollStore {
    pub fn new() -> Self {
        PollStore::default()
    }

    /// Atomically swap the cached list for a fresh server snapshot.
    pub fn replace(&mut self, polls: Vec<Poll>) {
        self.polls = polls;
    }

    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    pub fn get(&self, poll_id: i64) -> Option<&Poll> {
        self.polls.iter().find(|p| p.id == poll_id)
    }

    /// Pre-dispatch vote check against the cached snapshot.
    ///
    /// Resolves the caller-facing option id to the wire option index and
    /// rejects before any network traffic: unknown poll, closed poll,
    /// unknown option.
    pub fn prepare_vote(&self, poll_id: i64, option_id: i64) -> Result<usize> {
        self.prepare_vote_at(poll_id, option_id, Utc::now())
    }

    pub fn prepare_vote_at(
        &self,
        poll_id: i64,
        option_id: i64,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let poll = self
            .get(poll_id)
            .ok_or_else(|| Error::NotFound(format!("Poll {poll_id} is not in the cache")))?;

        if !poll.is_open_at(now) {
            return Err(Error::Conflict(format!(
                "Poll '{}' closed at {}",
                poll.title, poll.end_date
            )));
        }

        poll.options
            .iter()
            .position(|o| o.id == option_id)
            .ok_or_else(|| {
                Error::Validation(format!("Poll {poll_id} has no option {option_id}"))
            })
    }

    /// Optimistically bump the targeted option, before network completion.
    pub fn apply_vote(&mut self, poll_id: i64, option_index: usize) {
        if let Some(option) = self.option_mut(poll_id, option_index) {
            option.votes += 1;
        }
    }

    /// Roll an optimistic bump back after a failed vote request.
    pub fn revert_vote(&mut self, poll_id: i64, option_index: usize) {
        if let Some(option) = self.option_mut(poll_id, option_index) {
            option.votes = option.votes.saturating_sub(1);
        }
    }

    /// Replace one cached poll with the server's authoritative copy.
    pub fn reconcile(&mut self, poll: Poll) {
        match self.polls.iter_mut().find(|p| p.id == poll.id) {
            Some(cached) => *cached = poll,
            None => self.polls.push(poll),
        }
    }

    fn option_mut(
        &mut self,
        poll_id: i64,
        option_index: usize,
    ) -> Option<&mut crate::poll::PollOption> {
        self.polls
            .iter_mut()
            .find(|p| p.id == poll_id)
            .and_then(|p| p.options.get_mut(option_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::PollOption;
    use chrono::{Duration, TimeZone, Utc};

    fn make_test_poll(id: i64, end_date: DateTime<Utc>) -> Poll {
        Poll {
            id,
            title: format!("Poll {id}"),
            description: "Pick one".to_string(),
            end_date,
            options: vec![
                PollOption {
                    id: 10,
                    text: "A".to_string(),
                    votes: 0,
                },
                PollOption {
                    id: 11,
                    text: "B".to_string(),
                    votes: 2,
                },
            ],
            created_by: None,
        }
    }

    fn open_store() -> PollStore {
        let mut store = PollStore::new();
        store.replace(vec![make_test_poll(1, Utc::now() + Duration::hours(1))]);
        store
    }

    #[test]
    fn vote_bumps_only_the_targeted_option() {
        let mut store = open_store();
        let index = store.prepare_vote(1, 10).unwrap();
        assert_eq!(index, 0);

        store.apply_vote(1, index);

        let poll = store.get(1).unwrap();
        assert_eq!(poll.options[0].votes, 1);
        assert_eq!(poll.options[1].votes, 2);
        assert!((poll.percentage(&poll.options[0]) - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn revert_restores_the_count() {
        let mut store = open_store();
        store.apply_vote(1, 1);
        store.revert_vote(1, 1);
        assert_eq!(store.get(1).unwrap().options[1].votes, 2);
    }

    #[test]
    fn prepare_vote_rejects_closed_poll() {
        let end = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut store = PollStore::new();
        store.replace(vec![make_test_poll(1, end)]);

        // Closed at exact equality too.
        for now in [end, end + Duration::seconds(1)] {
            match store.prepare_vote_at(1, 10, now) {
                Err(Error::Conflict(_)) => {}
                other => panic!("expected Conflict, got {other:?}"),
            }
        }

        assert!(store.prepare_vote_at(1, 10, end - Duration::seconds(1)).is_ok());
    }

    #[test]
    fn prepare_vote_rejects_unknown_poll_and_option() {
        let store = open_store();

        match store.prepare_vote(99, 10) {
            Err(Error::NotFound(_)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }

        match store.prepare_vote(1, 99) {
            Err(Error::Validation(_)) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn reconcile_replaces_the_cached_poll() {
        let mut store = open_store();
        store.apply_vote(1, 0);

        // Server disagrees: someone else voted in between.
        let mut server_copy = make_test_poll(1, Utc::now() + Duration::hours(1));
        server_copy.options[0].votes = 5;
        store.reconcile(server_copy);

        assert_eq!(store.get(1).unwrap().options[0].votes, 5);
    }
}
