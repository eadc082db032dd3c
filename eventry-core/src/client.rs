//! HTTP client for the mini-app backend.
//!
//! One method per REST endpoint. Every call is issued at most once; retries
//! and caching are caller concerns. Non-2xx responses are translated into
//! the typed errors in [`crate::error`], transport failures into
//! [`Error::Network`] and undecodable bodies into [`Error::Protocol`].

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::admin::{Stats, TelegramUser, UserInfo};
use crate::error::{Error, Result};
use crate::event::{Event, EventKind, NewEvent};
use crate::poll::{NewPoll, Poll, PollScope};

/// HTTP client for the events/polls API.
pub struct SyncClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape of the backend (`{"detail": ...}`, with `{"error": ...}`
/// seen on older endpoints).
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(alias = "error")]
    detail: String,
}

#[derive(Deserialize)]
struct VerifyAdminResponse {
    is_admin: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct UsersResponse {
    users: Vec<UserInfo>,
}

impl SyncClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        SyncClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    // ------------------------------------------------------------------
    // Events
    // ------------------------------------------------------------------

    /// GET /api/events?type={upcoming|past} or GET /api/events/all
    pub async fn list_events(&self, kind: EventKind) -> Result<Vec<Event>> {
        let request = match kind.query_value() {
            None => self.http.get(format!("{}/api/events/all", self.base_url)),
            Some(kind) => self
                .http
                .get(format!("{}/api/events", self.base_url))
                .query(&[("type", kind)]),
        };

        let resp = request.send().await.map_err(Error::Network)?;
        decode(resp).await
    }

    /// GET /api/events/:id
    pub async fn get_event(&self, id: i64) -> Result<Event> {
        let resp = self
            .http
            .get(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }

    /// POST /api/events
    pub async fn create_event(&self, event: &NewEvent) -> Result<Event> {
        event.validate()?;

        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .json(event)
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }

    /// PUT /api/events/:id
    pub async fn update_event(&self, id: i64, event: &NewEvent) -> Result<Event> {
        event.validate()?;

        let resp = self
            .http
            .put(format!("{}/api/events/{}", self.base_url, id))
            .json(event)
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }

    /// DELETE /api/events/:id
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .map_err(Error::Network)?;
        expect_success(resp).await
    }

    // ------------------------------------------------------------------
    // Polls
    // ------------------------------------------------------------------

    /// GET /api/polls or GET /api/polls/all
    pub async fn list_polls(&self, scope: PollScope) -> Result<Vec<Poll>> {
        let url = match scope {
            PollScope::Active => format!("{}/api/polls", self.base_url),
            PollScope::All => format!("{}/api/polls/all", self.base_url),
        };

        let resp = self.http.get(url).send().await.map_err(Error::Network)?;
        decode(resp).await
    }

    /// GET /api/polls/:id
    pub async fn get_poll(&self, id: i64) -> Result<Poll> {
        let resp = self
            .http
            .get(format!("{}/api/polls/{}", self.base_url, id))
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }

    /// POST /api/polls
    pub async fn create_poll(&self, poll: &NewPoll) -> Result<Poll> {
        // Fail fast: the two-option minimum is checked before dispatch.
        poll.validate()?;

        let resp = self
            .http
            .post(format!("{}/api/polls", self.base_url))
            .json(poll)
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }

    /// PUT /api/polls/:id
    pub async fn update_poll(&self, id: i64, poll: &NewPoll) -> Result<Poll> {
        poll.validate()?;

        let resp = self
            .http
            .put(format!("{}/api/polls/{}", self.base_url, id))
            .json(poll)
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }

    /// DELETE /api/polls/:id
    pub async fn delete_poll(&self, id: i64) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/polls/{}", self.base_url, id))
            .send()
            .await
            .map_err(Error::Network)?;
        expect_success(resp).await
    }

    /// POST /api/polls/:id/vote
    ///
    /// Takes the wire option index (position within the poll's option list)
    /// and returns the poll with updated counts.
    pub async fn vote(&self, poll_id: i64, option_index: usize) -> Result<Poll> {
        let resp = self
            .http
            .post(format!("{}/api/polls/{}/vote", self.base_url, poll_id))
            .json(&serde_json::json!({ "optionIndex": option_index }))
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    /// POST /api/verify_admin
    ///
    /// Single-shot: the result is cached for the session by the caller
    /// (see `AppContext::ensure_admin`), never here.
    pub async fn verify_admin(&self, init_data: &str, user: &TelegramUser) -> Result<bool> {
        let resp = self
            .http
            .post(format!("{}/api/verify_admin", self.base_url))
            .json(&serde_json::json!({ "initData": init_data, "user": user }))
            .send()
            .await
            .map_err(Error::Network)?;

        let verdict: VerifyAdminResponse = decode(resp).await?;
        if let Some(error) = verdict.error {
            return Err(Error::Forbidden(error));
        }
        Ok(verdict.is_admin)
    }

    /// GET /api/user_info
    pub async fn list_users(&self) -> Result<Vec<UserInfo>> {
        let resp = self
            .http
            .get(format!("{}/api/user_info", self.base_url))
            .send()
            .await
            .map_err(Error::Network)?;
        let body: UsersResponse = decode(resp).await?;
        Ok(body.users)
    }

    /// GET /api/stats
    pub async fn stats(&self) -> Result<Stats> {
        let resp = self
            .http
            .get(format!("{}/api/stats", self.base_url))
            .send()
            .await
            .map_err(Error::Network)?;
        decode(resp).await
    }
}

/// Decode a JSON body, or translate a non-2xx status into a typed error.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        return Err(error_for(status, resp).await);
    }

    resp.json::<T>()
        .await
        .map_err(|e| Error::Protocol(format!("Malformed response body: {e}")))
}

/// Like `decode`, for endpoints whose success body carries no data.
async fn expect_success(resp: reqwest::Response) -> Result<()> {
    let status = resp.status();
    if !status.is_success() {
        return Err(error_for(status, resp).await);
    }
    Ok(())
}

async fn error_for(status: StatusCode, resp: reqwest::Response) -> Error {
    let detail = match resp.json::<ErrorResponse>().await {
        Ok(body) => body.detail,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };

    match status {
        StatusCode::NOT_FOUND => Error::NotFound(detail),
        StatusCode::CONFLICT => Error::Conflict(detail),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Error::Validation(detail),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Forbidden(detail),
        _ => Error::Protocol(format!("Unexpected status {status}: {detail}")),
    }
}
