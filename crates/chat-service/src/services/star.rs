//! Star service
//!
//! Channel bookmarks of the acting user.

use chat_core::Permissions;
use tracing::{info, instrument};
use uuid::Uuid;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Star service
pub struct StarService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StarService<'a> {
    /// Create a new StarService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Channels starred by the acting user
    #[instrument(skip(self))]
    pub async fn list_stars(&self, actor_id: Uuid) -> ServiceResult<Vec<Uuid>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_CHANNEL_STAR)
            .await?;

        Ok(self.ctx.star_repo().stared_channels(actor_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn add_star(&self, actor_id: Uuid, channel_id: Uuid) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::EDIT_CHANNEL_STAR)
            .await?;

        self.ctx.star_repo().add_star(actor_id, channel_id).await?;
        info!(user_id = %actor_id, channel_id = %channel_id, "Channel starred");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn remove_star(&self, actor_id: Uuid, channel_id: Uuid) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::EDIT_CHANNEL_STAR)
            .await?;

        self.ctx.star_repo().remove_star(actor_id, channel_id).await?;
        info!(user_id = %actor_id, channel_id = %channel_id, "Channel unstarred");
        Ok(())
    }
}
