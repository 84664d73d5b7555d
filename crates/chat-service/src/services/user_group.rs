//! User group service
//!
//! Only a group's admins may delete it.

use chat_core::entities::UserGroup;
use chat_core::events::{UserGroupCreatedEvent, UserGroupDeletedEvent};
use chat_core::{DomainError, Permissions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateUserGroupRequest, UserGroupResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// User group service
pub struct UserGroupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserGroupService<'a> {
    /// Create a new UserGroupService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, group_id: Uuid) -> ServiceResult<UserGroup> {
        Ok(self
            .ctx
            .user_group_repo()
            .find_by_id(group_id)
            .await?
            .ok_or(DomainError::UserGroupNotFound(group_id))?)
    }

    #[instrument(skip(self))]
    pub async fn list_groups(&self, actor_id: Uuid) -> ServiceResult<Vec<UserGroupResponse>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_USER_GROUP)
            .await?;

        let groups = self.ctx.user_group_repo().list().await?;
        Ok(groups.into_iter().map(UserGroupResponse::from).collect())
    }

    /// Create a group administered by the actor
    #[instrument(skip(self, request))]
    pub async fn create_group(
        &self,
        actor_id: Uuid,
        request: CreateUserGroupRequest,
    ) -> ServiceResult<UserGroupResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::CREATE_USER_GROUP)
            .await?;

        let group = UserGroup::new(
            Uuid::new_v4(),
            request.name,
            request.description,
            request.group_type,
            actor_id,
        );
        self.ctx.user_group_repo().create(&group).await?;

        info!(group_id = %group.id, name = %group.name, "User group created");
        self.ctx.publish(UserGroupCreatedEvent::new(group.clone()));

        Ok(UserGroupResponse::from(group))
    }

    #[instrument(skip(self))]
    pub async fn get_group(
        &self,
        actor_id: Uuid,
        group_id: Uuid,
    ) -> ServiceResult<UserGroupResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_USER_GROUP)
            .await?;

        Ok(UserGroupResponse::from(self.find(group_id).await?))
    }

    #[instrument(skip(self))]
    pub async fn delete_group(&self, actor_id: Uuid, group_id: Uuid) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::DELETE_USER_GROUP)
            .await?;

        let group = self.find(group_id).await?;
        if !group.is_admin(actor_id) {
            return Err(DomainError::NotGroupAdmin.into());
        }

        let group = self.ctx.user_group_repo().delete(group_id).await?;
        info!(group_id = %group_id, "User group deleted");
        self.ctx.publish(UserGroupDeletedEvent::new(group));

        Ok(())
    }
}
