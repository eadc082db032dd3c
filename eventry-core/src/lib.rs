//! Core library for the eventry mini-app client.
//!
//! This crate provides everything below the presentation layer:
//! - `Event` / `Poll` domain types and client-side filtering
//! - `SyncClient` for the JSON/HTTP backend API
//! - `EventStore` / `PollStore` caches, the on-device saved-events set and
//!   the optimistic vote path
//! - `AppContext` tying them together with a once-per-session admin check

pub mod admin;
pub mod client;
pub mod config;
pub mod context;
pub mod debounce;
pub mod error;
pub mod event;
pub mod poll;
pub mod store;

pub use client::SyncClient;
pub use context::AppContext;
pub use error::{Error, Result};
pub use event::{Event, EventFilter, EventKind, NewEvent};
pub use poll::{NewPoll, Poll, PollOption, PollScope};
pub use store::{EventStore, PollStore, SavedEvents};
