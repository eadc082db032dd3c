//! Local state: cached listings, the saved-events set and the optimistic
//! vote bookkeeping. Stores only mutate on confirmed success, except the
//! documented optimistic vote path in [`polls::PollStore`].

mod events;
mod polls;
mod saved;

pub use events::EventStore;
pub use polls::PollStore;
pub use saved::SavedEvents;
