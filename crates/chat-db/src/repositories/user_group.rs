//! In-memory implementation of UserGroupRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::{validate_user_group_name, UserGroup};
use chat_core::error::DomainError;
use chat_core::traits::{RepoResult, UserGroupRepository};

use crate::pool::DbPool;

use super::error::ensure_not_nil;

/// In-memory implementation of UserGroupRepository
#[derive(Clone)]
pub struct MemUserGroupRepository {
    pool: DbPool,
}

impl MemUserGroupRepository {
    /// Create a new MemUserGroupRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserGroupRepository for MemUserGroupRepository {
    #[instrument(skip(self, group), fields(group_id = %group.id, name = %group.name))]
    async fn create(&self, group: &UserGroup) -> RepoResult<()> {
        ensure_not_nil(group.id)?;
        validate_user_group_name(&group.name)?;

        let mut groups = self.pool.user_groups.write();
        if groups.any(|g| g.name == group.name) {
            return Err(DomainError::UserGroupNameExists(group.name.clone()));
        }
        if !groups.insert(group.id, group.clone()) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate user group id {}",
                group.id
            )));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<UserGroup>> {
        Ok(self.pool.user_groups.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<UserGroup>> {
        let mut groups: Vec<UserGroup> = self
            .pool
            .user_groups
            .read()
            .ordered()
            .into_iter()
            .cloned()
            .collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groups)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<UserGroup> {
        ensure_not_nil(id)?;

        self.pool
            .user_groups
            .write()
            .remove(&id)
            .ok_or(DomainError::UserGroupNotFound(id))
    }
}
