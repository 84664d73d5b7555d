//! User service
//!
//! Handles profile lookups, permission introspection, and account creation.

use chat_core::entities::{validate_user_name, User};
use chat_core::events::UserCreatedEvent;
use chat_core::{DomainError, Permissions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{PermissionsResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::permission::PermissionService;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the acting user
    #[instrument(skip(self))]
    pub async fn get_me(&self, actor_id: Uuid) -> ServiceResult<UserResponse> {
        let user = PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_ME)
            .await?;
        Ok(UserResponse::from(&user))
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, actor_id: Uuid, user_id: Uuid) -> ServiceResult<UserResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_USER)
            .await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(&user))
    }

    /// Role and permissions of the acting user
    #[instrument(skip(self))]
    pub async fn my_permissions(&self, actor_id: Uuid) -> ServiceResult<PermissionsResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .require_permission(actor_id, Permissions::GET_ME)
            .await?;
        permission_service.effective_permissions(actor_id).await
    }

    /// Role and permissions of another user
    #[instrument(skip(self))]
    pub async fn user_permissions(
        &self,
        actor_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<PermissionsResponse> {
        let permission_service = PermissionService::new(self.ctx);
        permission_service
            .require_permission(actor_id, Permissions::EDIT_OTHER_USERS)
            .await?;
        permission_service.effective_permissions(user_id).await
    }

    /// Create a user holding `role`
    ///
    /// Not gated: account provisioning belongs to the caller (startup
    /// bootstrap, user management).
    #[instrument(skip(self))]
    pub async fn create_user(&self, name: &str, role: &str) -> ServiceResult<User> {
        validate_user_name(name)?;
        if self.ctx.rbac().role(role).is_none() {
            return Err(ServiceError::validation(format!("unknown role: {role}")));
        }

        let user = User::new(Uuid::new_v4(), name.to_string(), role);
        self.ctx.user_repo().create(&user).await?;

        info!(user_id = %user.id, role = %role, "User created");
        self.ctx.publish(UserCreatedEvent::new(user.clone()));

        Ok(user)
    }

    /// Issue an access token for `user_id`
    #[instrument(skip(self))]
    pub fn issue_token(&self, user_id: Uuid) -> ServiceResult<String> {
        Ok(self.ctx.jwt_service().generate_access_token(user_id)?)
    }
}

#[cfg(test)]
mod tests {
    use chat_core::rbac::roles;

    use super::super::test_support;
    use super::*;

    #[tokio::test]
    async fn test_get_me() {
        let ctx = test_support::context();
        let reader = test_support::user(&ctx, roles::READ).await;

        let me = UserService::new(&ctx).get_me(reader.id).await.unwrap();
        assert_eq!(me.id, reader.id);
        assert_eq!(me.role, "read");
    }

    #[tokio::test]
    async fn test_user_permissions_requires_edit_other_users() {
        let ctx = test_support::context();
        let writer = test_support::user(&ctx, roles::WRITE).await;
        let admin = test_support::user(&ctx, roles::ADMIN).await;
        let service = UserService::new(&ctx);

        let err = service.user_permissions(writer.id, admin.id).await.unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PERMISSIONS");

        let perms = service.user_permissions(admin.id, writer.id).await.unwrap();
        assert_eq!(perms.role, "write");
    }

    #[tokio::test]
    async fn test_create_user_publishes_event() {
        let ctx = test_support::context();
        let mut rx = ctx.events().subscribe();

        let user = UserService::new(&ctx)
            .create_user("alice", roles::USER)
            .await
            .unwrap();

        let events = test_support::drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "USER_CREATED");
        assert_eq!(user.role, "user");
    }

    #[tokio::test]
    async fn test_create_user_rejects_unknown_role() {
        let ctx = test_support::context();
        let err = UserService::new(&ctx)
            .create_user("alice", "ghost")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_issue_token_round_trip() {
        let ctx = test_support::context();
        let id = Uuid::new_v4();
        let token = UserService::new(&ctx).issue_token(id).unwrap();
        assert_eq!(ctx.jwt_service().validate_access_token(&token).unwrap(), id);
    }
}
