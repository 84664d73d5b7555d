//! Pin entity - a message pinned in its channel

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Pin entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub id: Uuid,
    pub message_id: Uuid,
    pub channel_id: Uuid,
    /// User who pinned the message
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Pin {
    pub fn new(id: Uuid, message_id: Uuid, channel_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id,
            message_id,
            channel_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
