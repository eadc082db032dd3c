//! Cached event listings and the saved-events view over them.

use crate::error::Result;
use crate::event::{Event, EventFilter};

use super::SavedEvents;

/// Holds the last-fetched event list and the saved set.
///
/// The cached list keeps the server's response order; no client-side resort
/// happens anywhere. `replace` is the only way the list changes, so a failed
/// fetch leaves the previous snapshot visible.
pub struct EventStore {
    events: Vec<Event>,
    saved: SavedEvents,
}

impl EventStore {
    pub fn new(saved: SavedEvents) -> Self {
        EventStore {
            events: Vec::new(),
            saved,
        }
    }

    /// Atomically swap the cached list for a fresh server snapshot.
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Apply `filter` to the cached snapshot, preserving order.
    /// Nothing matching is an empty list, not an error.
    pub fn filter(&self, filter: &EventFilter) -> Vec<&Event> {
        self.events.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Flip the star on `event_id`; the set is persisted before this returns.
    pub fn toggle_saved(&mut self, event_id: i64) -> Result<bool> {
        self.saved.toggle(event_id)
    }

    pub fn is_saved(&self, event_id: i64) -> bool {
        self.saved.contains(event_id)
    }

    /// Saved events, filtered from the last snapshot; never re-fetched.
    pub fn saved_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| self.saved.contains(e.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_test_events() -> Vec<Event> {
        vec![
            Event {
                id: 1,
                title: "Python Meetup".to_string(),
                description: "Monthly community meetup".to_string(),
                date: Utc.with_ymd_and_hms(2025, 3, 20, 18, 0, 0).unwrap(),
                location: Some("Technopark".to_string()),
                category: Some("meetup".to_string()),
                created_by: None,
            },
            Event {
                id: 2,
                title: "AI Hackathon".to_string(),
                description: "48 hours of AI projects".to_string(),
                date: Utc.with_ymd_and_hms(2025, 4, 5, 10, 0, 0).unwrap(),
                location: None,
                category: Some("hackathon".to_string()),
                created_by: None,
            },
            Event {
                id: 3,
                title: "FastAPI Workshop".to_string(),
                description: "Modern web apps".to_string(),
                date: Utc.with_ymd_and_hms(2025, 3, 28, 17, 0, 0).unwrap(),
                location: Some("Online".to_string()),
                category: None,
                created_by: None,
            },
        ]
    }

    fn make_test_store() -> (tempfile::TempDir, EventStore) {
        let dir = tempfile::tempdir().unwrap();
        let saved = SavedEvents::load(dir.path().join("saved.json")).unwrap();
        let mut store = EventStore::new(saved);
        store.replace(make_test_events());
        (dir, store)
    }

    #[test]
    fn no_predicates_returns_everything_in_order() {
        let (_dir, store) = make_test_store();
        let all = store.filter(&EventFilter::default());
        let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn title_substring_always_matches_its_event() {
        let (_dir, store) = make_test_store();
        let filter = EventFilter {
            query: Some("hackathon".to_string()),
            ..Default::default()
        };
        let hits = store.filter(&filter);
        assert!(hits.iter().any(|e| e.id == 2));
    }

    #[test]
    fn category_filter_excludes_other_categories() {
        let (_dir, store) = make_test_store();
        let filter = EventFilter {
            category: Some("meetup".to_string()),
            ..Default::default()
        };
        let hits = store.filter(&filter);
        assert!(hits.iter().all(|e| e.category.as_deref() == Some("meetup")));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn month_filter_picks_calendar_month() {
        let (_dir, store) = make_test_store();
        let filter = EventFilter {
            month: Some(3),
            ..Default::default()
        };
        let ids: Vec<i64> = store.filter(&filter).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_snapshot_filters_to_empty_not_error() {
        let (_dir, mut store) = make_test_store();
        store.replace(Vec::new());
        assert!(store.filter(&EventFilter::default()).is_empty());
        assert!(store.saved_events().is_empty());
    }

    #[test]
    fn saved_events_come_from_the_snapshot() {
        let (_dir, mut store) = make_test_store();
        store.toggle_saved(2).unwrap();
        // Saved id with no matching event in the snapshot is simply absent.
        store.toggle_saved(99).unwrap();

        let saved: Vec<i64> = store.saved_events().iter().map(|e| e.id).collect();
        assert_eq!(saved, vec![2]);

        store.toggle_saved(2).unwrap();
        assert!(store.saved_events().is_empty());
    }
}
