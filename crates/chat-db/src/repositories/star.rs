//! In-memory implementation of StarRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::traits::{RepoResult, StarRepository};

use crate::pool::DbPool;

use super::error::{channel_not_found, ensure_not_nil};

/// In-memory implementation of StarRepository
#[derive(Clone)]
pub struct MemStarRepository {
    pool: DbPool,
}

impl MemStarRepository {
    /// Create a new MemStarRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StarRepository for MemStarRepository {
    #[instrument(skip(self))]
    async fn add_star(&self, user_id: Uuid, channel_id: Uuid) -> RepoResult<()> {
        ensure_not_nil(user_id)?;
        ensure_not_nil(channel_id)?;

        if !self.pool.channels.read().contains(&channel_id) {
            return Err(channel_not_found(channel_id));
        }
        self.pool.stars.entry(user_id).or_default().insert(channel_id);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_star(&self, user_id: Uuid, channel_id: Uuid) -> RepoResult<()> {
        ensure_not_nil(user_id)?;
        ensure_not_nil(channel_id)?;

        if let Some(mut starred) = self.pool.stars.get_mut(&user_id) {
            starred.remove(&channel_id);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stared_channels(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>> {
        if user_id.is_nil() {
            return Ok(Vec::new());
        }
        Ok(self
            .pool
            .stars
            .get(&user_id)
            .map(|starred| starred.iter().copied().collect())
            .unwrap_or_default())
    }
}
