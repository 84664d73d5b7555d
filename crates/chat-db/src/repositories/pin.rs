//! In-memory implementation of PinRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::Pin;
use chat_core::error::DomainError;
use chat_core::traits::{PinRepository, RepoResult};

use crate::pool::DbPool;

use super::error::{ensure_not_nil, message_not_found};

/// In-memory implementation of PinRepository
#[derive(Clone)]
pub struct MemPinRepository {
    pool: DbPool,
}

impl MemPinRepository {
    /// Create a new MemPinRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PinRepository for MemPinRepository {
    #[instrument(skip(self))]
    async fn create(&self, message_id: Uuid, user_id: Uuid) -> RepoResult<Pin> {
        ensure_not_nil(message_id)?;
        ensure_not_nil(user_id)?;

        let messages = self.pool.messages.read();
        let mut pins = self.pool.pins.write();

        let message = messages
            .get(&message_id)
            .ok_or_else(|| message_not_found(message_id))?;
        if pins.any(|p| p.message_id == message_id) {
            return Err(DomainError::AlreadyPinned);
        }

        let pin = Pin::new(Uuid::new_v4(), message_id, message.channel_id, user_id);
        if !pins.insert(pin.id, pin.clone()) {
            return Err(DomainError::DatabaseError("duplicate pin id".to_string()));
        }
        Ok(pin)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Pin>> {
        Ok(self.pool.pins.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_channel(&self, channel_id: Uuid) -> RepoResult<Vec<Pin>> {
        Ok(self
            .pool
            .pins
            .read()
            .filtered(|p| p.channel_id == channel_id)
            .into_iter()
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        ensure_not_nil(id)?;

        self.pool
            .pins
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::PinNotFound(id))
    }
}
