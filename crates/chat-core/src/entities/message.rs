//! Message entity - represents a chat message

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum message length in characters
pub const MESSAGE_MAX_LEN: usize = 10_000;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new Message
    pub fn new(id: Uuid, channel_id: Uuid, user_id: Uuid, content: String) -> Self {
        Self {
            id,
            channel_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Get a truncated preview of the message (for bot payloads and logs)
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => &self.content[..end],
            None => &self.content,
        }
    }
}

/// Validate message content: 1-10000 characters, not only whitespace
pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::ValidationError(
            "message content must not be empty".to_string(),
        ));
    }
    if content.chars().count() > MESSAGE_MAX_LEN {
        return Err(DomainError::ContentTooLong {
            max: MESSAGE_MAX_LEN,
        });
    }
    Ok(())
}
