//! In-memory implementation of MessageRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::{validate_content, Message};
use chat_core::error::DomainError;
use chat_core::traits::{MessageQuery, MessageRepository, RepoResult};

use crate::pool::DbPool;

use super::error::{channel_not_found, ensure_not_nil};

/// In-memory implementation of MessageRepository
#[derive(Clone)]
pub struct MemMessageRepository {
    pool: DbPool,
}

impl MemMessageRepository {
    /// Create a new MemMessageRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for MemMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>> {
        Ok(self.pool.messages.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_channel(
        &self,
        channel_id: Uuid,
        query: MessageQuery,
    ) -> RepoResult<Vec<Message>> {
        let messages = self.pool.messages.read();
        Ok(messages
            .filtered(|m| m.channel_id == channel_id)
            .into_iter()
            .rev()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        ensure_not_nil(message.id)?;
        validate_content(&message.content)?;

        let channels = self.pool.channels.read();
        if !channels.contains(&message.channel_id) {
            return Err(channel_not_found(message.channel_id));
        }

        let mut messages = self.pool.messages.write();
        if !messages.insert(message.id, message.clone()) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate message id {}",
                message.id
            )));
        }
        Ok(())
    }
}
