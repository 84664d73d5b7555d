//! Channel entity - a public text channel

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

use super::check_name;

/// Maximum length of a channel name
pub const CHANNEL_NAME_MAX_LEN: usize = 20;

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Uuid,
    pub name: String,
    pub topic: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Channel {
    /// Create a new channel
    #[must_use]
    pub fn new(id: Uuid, name: String, creator_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            topic: String::new(),
            creator_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update channel topic
    pub fn set_topic(&mut self, topic: String) {
        self.topic = topic;
        self.updated_at = Utc::now();
    }
}

/// Validate a channel name: 1-20 characters of `[A-Za-z0-9_-]`
pub fn validate_channel_name(name: &str) -> Result<(), DomainError> {
    check_name("channel name", name, CHANNEL_NAME_MAX_LEN, true)
}
