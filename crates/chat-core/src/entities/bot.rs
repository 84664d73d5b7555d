//! Bot entity - an outbound integration that receives domain events

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::BotEventType;

/// Bot delivery state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BotState {
    /// Registered but not receiving events
    #[default]
    Inactive,
    /// Receiving events
    Active,
    /// Delivery suspended after failures
    Paused,
}

/// Bot entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bot {
    pub id: Uuid,
    pub bot_user_id: Uuid,
    pub name: String,
    pub description: String,
    pub creator_id: Uuid,
    pub subscribe_events: BTreeSet<BotEventType>,
    pub state: BotState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bot {
    /// Create a new Bot
    pub fn new(
        id: Uuid,
        bot_user_id: Uuid,
        name: String,
        description: String,
        creator_id: Uuid,
        subscribe_events: BTreeSet<BotEventType>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            bot_user_id,
            name,
            description,
            creator_id,
            subscribe_events,
            state: BotState::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the bot currently receives events
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == BotState::Active
    }

    /// Check if the bot should receive `event`
    pub fn receives(&self, event: BotEventType) -> bool {
        self.is_active() && self.subscribe_events.contains(&event)
    }

    /// Change the delivery state
    pub fn set_state(&mut self, state: BotState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}
