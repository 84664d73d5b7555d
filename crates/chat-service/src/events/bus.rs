//! In-process event bus
//!
//! Services publish [`DomainEvent`]s here after a successful write. The bot
//! dispatcher is the main subscriber.

use chat_core::DomainEvent;
use tokio::sync::broadcast;

/// Default number of buffered events per subscriber
pub const DEFAULT_EVENT_BUFFER: usize = 1024;

/// Broadcast channel carrying domain events
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus that buffers up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event; returns the number of subscribers that will see it
    ///
    /// Publishing with no subscriber is not an error.
    pub fn publish(&self, event: impl Into<DomainEvent>) -> usize {
        let event = event.into();
        let event_type = event.event_type();
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::trace!(event_type, receivers, "Event published");
                receivers
            }
            Err(_) => {
                tracing::trace!(event_type, "Event published with no subscribers");
                0
            }
        }
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER)
    }
}
