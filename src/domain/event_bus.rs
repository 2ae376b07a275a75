//! Fan-out of committed catalog changes.
//!
//! The [`CatalogService`](crate::service::CatalogService) publishes one
//! [`CatalogEvent`] per committed `add` or `remove` from inside the catalog's
//! commit hook. The bus therefore carries changes in commit order, and every
//! subscriber sees the same sequence from the moment it subscribed.
//!
//! Publishing is a non-blocking ring-buffer write, so it is safe to do while
//! the catalog lock is held. A subscriber that falls more than `capacity`
//! events behind gets `RecvError::Lagged` and has to resynchronize from the
//! catalog itself.

use tokio::sync::broadcast;

use super::CatalogEvent;

/// Sender side of the catalog change feed. Clones share one channel.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CatalogEvent>,
}

impl EventBus {
    /// Creates a bus that buffers up to `capacity` undelivered events per
    /// subscriber. Zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Sends `event` to every current subscriber and returns how many there
    /// were. With nobody listening the change is simply not recorded.
    pub fn publish(&self, event: CatalogEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Starts a change feed beginning with the next published event.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.sender.subscribe()
    }

    /// Number of live change feeds.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
