//! Poll types and the vote arithmetic derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A poll as served by the backend.
///
/// A poll is open until its `end_date` and read-only (results view) after
/// that. A poll whose `end_date` equals the current instant counts as closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// The backend serves both `end_date` and `endDate` depending on the
    /// endpoint; accept either.
    #[serde(alias = "endDate")]
    pub end_date: DateTime<Utc>,
    /// Ordered as served; option order is the wire order.
    pub options: Vec<PollOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
}

/// One answer option of a poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOption {
    /// Unique within the parent poll.
    pub id: i64,
    pub text: String,
    /// Only ever increases, and only while the parent poll is open.
    #[serde(default, alias = "votes_count")]
    pub votes: u64,
}

impl Poll {
    pub fn is_open(&self) -> bool {
        self.is_open_at(Utc::now())
    }

    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        now < self.end_date
    }

    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|o| o.votes).sum()
    }

    /// Share of the total vote held by `option`, in percent.
    /// Exactly `0.0` when the poll has no votes at all.
    pub fn percentage(&self, option: &PollOption) -> f64 {
        let total = self.total_votes();
        if total == 0 {
            return 0.0;
        }
        option.votes as f64 / total as f64 * 100.0
    }
}

/// Which polls to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollScope {
    /// Polls whose end date has not passed.
    Active,
    /// Every poll, admin-only on the server.
    All,
}

/// Payload for creating or replacing a poll.
#[derive(Debug, Clone)]
pub struct NewPoll {
    pub title: String,
    pub description: String,
    pub end_date: DateTime<Utc>,
    /// Option texts, in display order.
    pub options: Vec<String>,
}

impl NewPoll {
    /// Fail-fast check, required to run before any network dispatch:
    /// a poll needs a title and at least two non-empty options.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("Poll title must not be empty".into()));
        }
        let filled = self.options.iter().filter(|o| !o.trim().is_empty()).count();
        if filled < 2 {
            return Err(Error::Validation(
                "A poll needs at least 2 non-empty options".into(),
            ));
        }
        Ok(())
    }
}

impl Serialize for NewPoll {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        #[derive(Serialize)]
        struct OptionText<'a> {
            text: &'a str,
        }

        let options: Vec<OptionText<'_>> = self
            .options
            .iter()
            .filter(|o| !o.trim().is_empty())
            .map(|o| OptionText { text: o })
            .collect();

        // The backend reads `end_date` on create and `endDate` on update;
        // send both spellings, mirroring the read-side aliases above.
        let mut state = serializer.serialize_struct("NewPoll", 5)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("end_date", &self.end_date)?;
        state.serialize_field("endDate", &self.end_date)?;
        state.serialize_field("options", &options)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn make_test_poll() -> Poll {
        Poll {
            id: 7,
            title: "Next meetup topic".to_string(),
            description: "Pick one".to_string(),
            end_date: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            options: vec![
                PollOption {
                    id: 1,
                    text: "A".to_string(),
                    votes: 0,
                },
                PollOption {
                    id: 2,
                    text: "B".to_string(),
                    votes: 0,
                },
            ],
            created_by: None,
        }
    }

    #[test]
    fn closed_at_exact_end_date() {
        let poll = make_test_poll();
        let end = poll.end_date;
        assert!(poll.is_open_at(end - Duration::seconds(1)));
        assert!(!poll.is_open_at(end));
        assert!(!poll.is_open_at(end + Duration::seconds(1)));
    }

    #[test]
    fn percentage_is_zero_without_votes() {
        let poll = make_test_poll();
        for option in &poll.options {
            assert_eq!(poll.percentage(option), 0.0);
        }
    }

    #[test]
    fn sole_voted_option_is_one_hundred_percent() {
        let mut poll = make_test_poll();
        poll.options.truncate(1);
        poll.options[0].votes = 3;
        assert_eq!(poll.percentage(&poll.options[0]), 100.0);
    }

    #[test]
    fn percentages_split_the_total() {
        let mut poll = make_test_poll();
        poll.options[0].votes = 3;
        poll.options[1].votes = 1;
        assert_eq!(poll.percentage(&poll.options[0]), 75.0);
        assert_eq!(poll.percentage(&poll.options[1]), 25.0);
    }

    #[test]
    fn new_poll_needs_two_nonempty_options() {
        let mut poll = NewPoll {
            title: "Topic".to_string(),
            description: String::new(),
            end_date: Utc::now(),
            options: vec!["A".to_string()],
        };
        assert!(poll.validate().is_err());

        poll.options.push("   ".to_string());
        assert!(poll.validate().is_err());

        poll.options.push("B".to_string());
        assert!(poll.validate().is_ok());
    }

    #[test]
    fn new_poll_serializes_options_as_objects() {
        let poll = NewPoll {
            title: "Topic".to_string(),
            description: "Pick one".to_string(),
            end_date: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            options: vec!["A".to_string(), "".to_string(), "B".to_string()],
        };
        let value = serde_json::to_value(&poll).unwrap();
        assert_eq!(
            value["options"],
            serde_json::json!([{ "text": "A" }, { "text": "B" }])
        );
    }

    #[test]
    fn new_poll_carries_both_end_date_spellings() {
        let poll = NewPoll {
            title: "Topic".to_string(),
            description: String::new(),
            end_date: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            options: vec!["A".to_string(), "B".to_string()],
        };
        let value = serde_json::to_value(&poll).unwrap();
        // The update endpoint reads endDate, the create endpoint end_date.
        assert_eq!(value["endDate"], value["end_date"]);
        assert!(!value["endDate"].is_null());
    }

    #[test]
    fn poll_accepts_camel_case_end_date() {
        let json = serde_json::json!({
            "id": 1,
            "title": "T",
            "description": "D",
            "endDate": "2025-06-01T12:00:00Z",
            "options": [{ "id": 1, "text": "A", "votes_count": 4 }],
        });
        let poll: Poll = serde_json::from_value(json).unwrap();
        assert_eq!(poll.options[0].votes, 4);
        assert_eq!(
            poll.end_date,
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
        );
    }
}
