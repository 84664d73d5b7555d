//! Permission service
//!
//! Resolves the acting subject's role and gates every operation on the
//! RBAC model. Unknown and inactive subjects hold no role.

use chat_core::entities::User;
use chat_core::{DomainError, Permissions};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::dto::PermissionsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Permission service for access control
pub struct PermissionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PermissionService<'a> {
    /// Create a new PermissionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the subject if it may act at all
    async fn active_subject(&self, user_id: Uuid) -> ServiceResult<Option<User>> {
        let user = self.ctx.user_repo().find_by_id(user_id).await?;
        Ok(user.filter(User::is_active))
    }

    /// Role name of the subject, or `None` for unknown or inactive subjects
    #[instrument(skip(self))]
    pub async fn current_role(&self, user_id: Uuid) -> ServiceResult<Option<String>> {
        Ok(self.active_subject(user_id).await?.map(|u| u.role))
    }

    /// Check whether the subject holds every flag of `permission`
    #[instrument(skip(self))]
    pub async fn check_permission(
        &self,
        user_id: Uuid,
        permission: Permissions,
    ) -> ServiceResult<bool> {
        Ok(match self.current_role(user_id).await? {
            Some(role) => self.ctx.rbac().is_granted(&role, permission),
            None => false,
        })
    }

    /// Check permission and return the acting user, or an error if denied
    #[instrument(skip(self))]
    pub async fn require_permission(
        &self,
        user_id: Uuid,
        permission: Permissions,
    ) -> ServiceResult<User> {
        let subject = self.active_subject(user_id).await?;
        match subject {
            Some(user) if self.ctx.rbac().is_granted(&user.role, permission) => Ok(user),
            Some(user) => {
                debug!(user_id = %user_id, role = %user.role, permission = %permission, "Permission denied");
                Err(ServiceError::permission_denied(permission.to_string()))
            }
            None => {
                debug!(user_id = %user_id, permission = %permission, "Permission denied for unknown or inactive subject");
                Err(ServiceError::permission_denied(permission.to_string()))
            }
        }
    }

    /// Role and granted permission names of `user_id`
    #[instrument(skip(self))]
    pub async fn effective_permissions(&self, user_id: Uuid) -> ServiceResult<PermissionsResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let permissions = if user.is_active() {
            self.ctx
                .rbac()
                .role_permissions(&user.role)
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        Ok(PermissionsResponse {
            role: user.role,
            permissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chat_common::JwtService;
    use chat_core::entities::UserState;
    use chat_core::rbac::roles;
    use chat_core::Rbac;

    use super::*;

    async fn context_with(users: &[User]) -> ServiceContext {
        let pool = chat_db::create_pool();
        let ctx = ServiceContext::builder()
            .in_memory(&pool)
            .rbac(Arc::new(Rbac::standard().unwrap()))
            .jwt_service(Arc::new(JwtService::new("secret", 60)))
            .build()
            .unwrap();
        for user in users {
            ctx.user_repo().create(user).await.unwrap();
        }
        ctx
    }

    #[tokio::test]
    async fn test_read_role_can_get_but_not_create_stamps() {
        let reader = User::new(Uuid::new_v4(), "reader".to_string(), roles::READ);
        let ctx = context_with(&[reader.clone()]).await;
        let service = PermissionService::new(&ctx);

        assert!(service
            .check_permission(reader.id, Permissions::GET_STAMP)
            .await
            .unwrap());
        let err = service
            .require_permission(reader.id, Permissions::CREATE_STAMP)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert!(err.to_string().contains("create_stamp"));
    }

    #[tokio::test]
    async fn test_unknown_subject_is_denied() {
        let ctx = context_with(&[]).await;
        let service = PermissionService::new(&ctx);

        assert_eq!(service.current_role(Uuid::new_v4()).await.unwrap(), None);
        assert!(!service
            .check_permission(Uuid::new_v4(), Permissions::GET_STAMP)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_inactive_subject_is_denied() {
        let mut admin = User::new(Uuid::new_v4(), "root".to_string(), roles::ADMIN);
        admin.set_state(UserState::Suspended);
        let ctx = context_with(&[admin.clone()]).await;
        let service = PermissionService::new(&ctx);

        assert!(service
            .require_permission(admin.id, Permissions::GET_STAMP)
            .await
            .is_err());
        let perms = service.effective_permissions(admin.id).await.unwrap();
        assert!(perms.permissions.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_role_is_denied() {
        let ghost = User::new(Uuid::new_v4(), "ghost".to_string(), "ghost");
        let ctx = context_with(&[ghost.clone()]).await;
        let service = PermissionService::new(&ctx);

        assert!(!service
            .check_permission(ghost.id, Permissions::GET_STAMP)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_effective_permissions() {
        let writer = User::new(Uuid::new_v4(), "writer".to_string(), roles::WRITE);
        let ctx = context_with(&[writer.clone()]).await;

        let perms = PermissionService::new(&ctx)
            .effective_permissions(writer.id)
            .await
            .unwrap();
        assert_eq!(perms.role, "write");
        assert!(perms.permissions.iter().any(|p| p == "create_stamp"));
        assert!(!perms.permissions.iter().any(|p| p == "delete_stamp"));
    }

    #[tokio::test]
    async fn test_effective_permissions_of_unknown_user() {
        let ctx = context_with(&[]).await;

        let err = PermissionService::new(&ctx)
            .effective_permissions(Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_USER");
    }
}
