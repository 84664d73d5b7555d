//! In-memory implementation of MessageStampRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::MessageStamp;
use chat_core::error::DomainError;
use chat_core::traits::{MessageStampRepository, RepoResult};

use crate::pool::DbPool;

use super::error::{ensure_not_nil, message_not_found};

/// In-memory implementation of MessageStampRepository
#[derive(Clone)]
pub struct MemMessageStampRepository {
    pool: DbPool,
}

impl MemMessageStampRepository {
    /// Create a new MemMessageStampRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStampRepository for MemMessageStampRepository {
    #[instrument(skip(self))]
    async fn add(
        &self,
        message_id: Uuid,
        stamp_id: Uuid,
        user_id: Uuid,
    ) -> RepoResult<MessageStamp> {
        ensure_not_nil(message_id)?;
        ensure_not_nil(stamp_id)?;
        ensure_not_nil(user_id)?;

        let messages = self.pool.messages.read();
        if !messages.contains(&message_id) {
            return Err(message_not_found(message_id));
        }
        let stamps = self.pool.stamps.read();
        if !stamps.contains(&stamp_id) {
            return Err(DomainError::StampNotFound(stamp_id));
        }

        let mut on_message = self.pool.message_stamps.entry(message_id).or_default();
        let stamp = match on_message
            .iter_mut()
            .find(|s| s.is_use_of(stamp_id, user_id))
        {
            Some(existing) => {
                existing.press();
                existing.clone()
            }
            None => {
                let stamp = MessageStamp::new(message_id, stamp_id, user_id);
                on_message.push(stamp.clone());
                stamp
            }
        };

        tracing::debug!(count = stamp.count, "Message stamp added");
        Ok(stamp)
    }

    #[instrument(skip(self))]
    async fn remove(&self, message_id: Uuid, stamp_id: Uuid, user_id: Uuid) -> RepoResult<bool> {
        ensure_not_nil(message_id)?;
        ensure_not_nil(stamp_id)?;
        ensure_not_nil(user_id)?;

        let Some(mut on_message) = self.pool.message_stamps.get_mut(&message_id) else {
            return Ok(false);
        };
        let before = on_message.len();
        on_message.retain(|s| !s.is_use_of(stamp_id, user_id));
        Ok(on_message.len() != before)
    }

    #[instrument(skip(self))]
    async fn find_by_message(&self, message_id: Uuid) -> RepoResult<Vec<MessageStamp>> {
        Ok(self
            .pool
            .message_stamps
            .get(&message_id)
            .map(|on_message| on_message.clone())
            .unwrap_or_default())
    }
}
