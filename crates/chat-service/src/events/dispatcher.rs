//! Bot event dispatcher
//!
//! Consumes the [`EventBus`] in a background task and runs the matching
//! handler for each event.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use chat_core::traits::BotRepository;
use chat_core::DomainEvent;
use parking_lot::Mutex;
use tokio::sync::{broadcast, Notify};

use super::bus::EventBus;
use super::handlers::{self, HandlerContext};
use super::multicaster::BotMulticaster;

/// Dispatches domain events to subscribed bots
pub struct BotEventDispatcher {
    /// Taken by the loop on start
    receiver: Mutex<Option<broadcast::Receiver<DomainEvent>>>,
    bots: Arc<dyn BotRepository>,
    multicaster: Arc<dyn BotMulticaster>,
    /// Whether the dispatcher is running
    running: AtomicBool,
    /// Events that failed to dispatch
    failures: AtomicU64,
    shutdown: Notify,
}

impl BotEventDispatcher {
    /// Create a new dispatcher
    ///
    /// Subscribes to `bus` immediately, so every event published after this
    /// call is seen once the dispatcher starts. The dispatcher keeps no
    /// sender; the loop ends when every publisher is gone.
    pub fn new(
        bus: &EventBus,
        bots: Arc<dyn BotRepository>,
        multicaster: Arc<dyn BotMulticaster>,
    ) -> Self {
        Self {
            receiver: Mutex::new(Some(bus.subscribe())),
            bots,
            multicaster,
            running: AtomicBool::new(false),
            failures: AtomicU64::new(0),
            shutdown: Notify::new(),
        }
    }

    /// Start the dispatcher
    ///
    /// A dispatcher runs at most once.
    pub fn start(self: Arc<Self>) {
        let Some(receiver) = self.receiver.lock().take() else {
            tracing::warn!("Bot event dispatcher was already started");
            return;
        };

        self.running.store(true, Ordering::SeqCst);
        let dispatcher = self.clone();
        tokio::spawn(async move {
            dispatcher.run(receiver).await;
        });

        tracing::info!("Bot event dispatcher started");
    }

    /// Stop the loop; an event being dispatched finishes first
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            self.shutdown.notify_one();
            tracing::info!("Bot event dispatcher stopping");
        }
    }

    /// Whether the loop is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Number of events whose dispatch failed
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    async fn run(&self, mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            tokio::select! {
                () = self.shutdown.notified() => break,
                received = receiver.recv() => match received {
                    Ok(event) => {
                        self.dispatch(&event).await;
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "Bot event dispatcher lagged behind");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::warn!("Event bus closed");
                        break;
                    }
                },
            }
        }

        self.running.store(false, Ordering::SeqCst);
        tracing::info!("Bot event dispatcher loop ended");
    }

    /// Run the handler for one event
    pub async fn dispatch(&self, event: &DomainEvent) {
        let ctx = HandlerContext {
            bots: self.bots.as_ref(),
            multicaster: self.multicaster.as_ref(),
        };

        match handlers::handle(&ctx, event).await {
            Ok(0) => {
                tracing::trace!(event_type = event.event_type(), "No bot subscribed");
            }
            Ok(sent) => {
                tracing::debug!(event_type = event.event_type(), bots = sent, "Bot event dispatched");
            }
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                tracing::error!(event_type = event.event_type(), error = %e, "Bot event dispatch failed");
            }
        }
    }
}

impl std::fmt::Debug for BotEventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotEventDispatcher")
            .field("running", &self.is_running())
            .field("failures", &self.failure_count())
            .finish()
    }
}
