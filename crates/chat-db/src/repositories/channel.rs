//! In-memory implementation of ChannelRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::{validate_channel_name, Channel};
use chat_core::error::DomainError;
use chat_core::traits::{ChannelRepository, RepoResult};

use crate::pool::DbPool;

use super::error::{ensure_not_nil, user_not_found};

/// In-memory implementation of ChannelRepository
#[derive(Clone)]
pub struct MemChannelRepository {
    pool: DbPool,
}

impl MemChannelRepository {
    /// Create a new MemChannelRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for MemChannelRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Channel>> {
        Ok(self.pool.channels.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Channel>> {
        Ok(self
            .pool
            .channels
            .read()
            .ordered()
            .into_iter()
            .cloned()
            .collect())
    }

    #[instrument(skip(self, channel), fields(channel_id = %channel.id))]
    async fn create(&self, channel: &Channel) -> RepoResult<()> {
        ensure_not_nil(channel.id)?;
        validate_channel_name(&channel.name)?;

        let users = self.pool.users.read();
        if !users.contains(&channel.creator_id) {
            return Err(user_not_found(channel.creator_id));
        }

        let mut channels = self.pool.channels.write();
        if channels.any(|c| c.name == channel.name) {
            return Err(DomainError::ChannelNameExists(channel.name.clone()));
        }
        if !channels.insert(channel.id, channel.clone()) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate channel id {}",
                channel.id
            )));
        }
        Ok(())
    }
}
