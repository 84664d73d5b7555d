//! Test fixtures and data generators

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chat_core::{Bot, BotEventType};
use chat_service::BotMulticaster;
use parking_lot::Mutex;
use serde_json::{json, Value};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A unique name usable for users, channels and stamps
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{}", unique_suffix())
}

pub fn channel_body() -> Value {
    json!({ "name": unique_name("ch"), "topic": "testing" })
}

pub fn stamp_body() -> Value {
    json!({ "name": unique_name("stamp") })
}

pub fn group_body() -> Value {
    json!({ "name": unique_name("group"), "description": "testers", "type": "team" })
}

pub fn webhook_body(channel_id: &str) -> Value {
    json!({
        "name": unique_name("hook"),
        "description": "ci results",
        "channelId": channel_id,
        "secret": "s3cret",
    })
}

pub fn bot_body(events: &[BotEventType]) -> Value {
    json!({
        "name": unique_name("bot"),
        "displayName": "Test bot",
        "subscribeEvents": events,
    })
}

/// One multicast call seen by [`RecordingMulticaster`]
#[derive(Debug, Clone)]
pub struct Delivery {
    pub event: BotEventType,
    pub payload: Value,
    pub bot_ids: Vec<Uuid>,
}

/// Multicaster that keeps every delivery for inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingMulticaster {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
}

impl RecordingMulticaster {
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }

    pub fn deliveries_of(&self, event: BotEventType) -> Vec<Delivery> {
        self.deliveries()
            .into_iter()
            .filter(|d| d.event == event)
            .collect()
    }
}

#[async_trait]
impl BotMulticaster for RecordingMulticaster {
    async fn multicast(
        &self,
        event: BotEventType,
        payload: Value,
        bots: &[Bot],
    ) -> anyhow::Result<()> {
        self.deliveries.lock().push(Delivery {
            event,
            payload,
            bot_ids: bots.iter().map(|b| b.id).collect(),
        });
        Ok(())
    }
}
