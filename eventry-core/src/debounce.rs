//! Debouncing for search-as-you-type filtering.
//!
//! Fixed short delay, most recent call wins, earlier pending calls are
//! discarded. This is the only timing discipline in the client: there is no
//! cancellation of in-flight requests, so a caller that wants to drop a
//! stale response can keep the winning ticket's generation around and
//! compare.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Hands out generation-stamped tickets; only the newest ticket settles.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Take a ticket for the latest input. Any ticket taken earlier and not
    /// yet settled loses.
    pub fn acquire(&self) -> Ticket {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            delay: self.delay,
            generation: Arc::clone(&self.generation),
        }
    }
}

/// One debounced call attempt.
pub struct Ticket {
    id: u64,
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Ticket {
    /// Wait out the delay; `true` means this ticket is still the newest and
    /// the caller should run the work now.
    pub async fn settle(self) -> bool {
        sleep(self.delay).await;
        self.id == self.generation.load(Ordering::SeqCst)
    }

    /// Generation stamp, for callers that also want to drop stale responses.
    pub fn generation(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sole_ticket_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        assert!(debouncer.acquire().settle().await);
    }

    #[tokio::test]
    async fn newer_ticket_discards_pending_one() {
        let debouncer = Debouncer::new(Duration::from_millis(20));

        let first = debouncer.acquire();
        let second = debouncer.acquire();

        assert!(!first.settle().await);
        assert!(second.settle().await);
    }

    #[tokio::test]
    async fn rapid_burst_keeps_only_the_last() {
        let debouncer = Debouncer::new(Duration::from_millis(10));

        let tickets: Vec<Ticket> = (0..5).map(|_| debouncer.acquire()).collect();
        let mut settled = Vec::new();
        for ticket in tickets {
            settled.push(ticket.settle().await);
        }

        assert_eq!(settled, vec![false, false, false, false, true]);
    }
}
