//! In-memory implementation of StampRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::{validate_stamp_name, Stamp};
use chat_core::error::DomainError;
use chat_core::traits::{RepoResult, StampRepository, UpdateStampArgs};

use crate::pool::DbPool;

use super::error::{ensure_not_nil, user_not_found};

/// In-memory implementation of StampRepository
#[derive(Clone)]
pub struct MemStampRepository {
    pool: DbPool,
}

impl MemStampRepository {
    /// Create a new MemStampRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StampRepository for MemStampRepository {
    #[instrument(skip(self, stamp), fields(stamp_id = %stamp.id, name = %stamp.name))]
    async fn create(&self, stamp: &Stamp) -> RepoResult<()> {
        ensure_not_nil(stamp.id)?;
        validate_stamp_name(&stamp.name)?;

        let users = self.pool.users.read();
        let mut stamps = self.pool.stamps.write();

        if !users.contains(&stamp.creator_id) {
            return Err(user_not_found(stamp.creator_id));
        }
        if stamps.any(|s| s.name == stamp.name) {
            return Err(DomainError::StampNameExists(stamp.name.clone()));
        }
        if !stamps.insert(stamp.id, stamp.clone()) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate stamp id {}",
                stamp.id
            )));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Stamp>> {
        Ok(self.pool.stamps.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Stamp>> {
        let mut stamps: Vec<Stamp> = self
            .pool
            .stamps
            .read()
            .ordered()
            .into_iter()
            .cloned()
            .collect();
        stamps.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(stamps)
    }

    #[instrument(skip(self))]
    async fn update(&self, id: Uuid, args: UpdateStampArgs) -> RepoResult<()> {
        ensure_not_nil(id)?;

        let mut stamps = self.pool.stamps.write();
        if !stamps.contains(&id) {
            return Err(DomainError::StampNotFound(id));
        }
        if let Some(name) = &args.name {
            validate_stamp_name(name)?;
            if stamps.any(|s| s.id != id && &s.name == name) {
                return Err(DomainError::StampNameExists(name.clone()));
            }
        }

        let stamp = stamps.get_mut(&id).ok_or(DomainError::StampNotFound(id))?;
        if let Some(name) = args.name {
            stamp.set_name(name);
        }
        if args.file_id.is_some() {
            stamp.set_file(args.file_id);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        ensure_not_nil(id)?;

        let mut stamps = self.pool.stamps.write();
        if stamps.remove(&id).is_none() {
            return Err(DomainError::StampNotFound(id));
        }
        // Uses of the stamp on messages go with it
        for mut on_message in self.pool.message_stamps.iter_mut() {
            on_message.retain(|s| s.stamp_id != id);
        }
        Ok(())
    }
}
