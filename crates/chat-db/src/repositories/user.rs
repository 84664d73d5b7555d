//! In-memory implementation of UserRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::User;
use chat_core::error::DomainError;
use chat_core::traits::{RepoResult, UserRepository};

use crate::pool::DbPool;

use super::error::{ensure_not_nil, user_not_found};

/// In-memory implementation of UserRepository
#[derive(Clone)]
pub struct MemUserRepository {
    pool: DbPool,
}

impl MemUserRepository {
    /// Create a new MemUserRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MemUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        Ok(self.pool.users.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        Ok(self.pool.users.read().find(|u| u.name == name).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<User>> {
        Ok(self.pool.users.read().ordered().into_iter().cloned().collect())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        ensure_not_nil(user.id)?;

        let mut users = self.pool.users.write();
        if users.any(|u| u.name == user.name) {
            return Err(DomainError::UserNameExists(user.name.clone()));
        }
        if !users.insert(user.id, user.clone()) {
            return Err(DomainError::DatabaseError(format!(
                "duplicate user id {}",
                user.id
            )));
        }
        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        ensure_not_nil(user.id)?;

        let mut users = self.pool.users.write();
        if users.any(|u| u.id != user.id && u.name == user.name) {
            return Err(DomainError::UserNameExists(user.name.clone()));
        }
        let row = users.get_mut(&user.id).ok_or_else(|| user_not_found(user.id))?;
        *row = user.clone();
        Ok(())
    }
}
