//! Stamp service

use chat_core::entities::Stamp;
use chat_core::events::StampCreatedEvent;
use chat_core::traits::UpdateStampArgs;
use chat_core::{DomainError, Permissions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateStampRequest, StampResponse, UpdateStampRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Stamp service
pub struct StampService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StampService<'a> {
    /// Create a new StampService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, stamp_id: Uuid) -> ServiceResult<Stamp> {
        Ok(self
            .ctx
            .stamp_repo()
            .find_by_id(stamp_id)
            .await?
            .ok_or(DomainError::StampNotFound(stamp_id))?)
    }

    /// List every stamp, sorted by name
    #[instrument(skip(self))]
    pub async fn list_stamps(&self, actor_id: Uuid) -> ServiceResult<Vec<StampResponse>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_STAMP)
            .await?;

        let stamps = self.ctx.stamp_repo().list().await?;
        Ok(stamps.into_iter().map(StampResponse::from).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn create_stamp(
        &self,
        actor_id: Uuid,
        request: CreateStampRequest,
    ) -> ServiceResult<StampResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::CREATE_STAMP)
            .await?;

        let stamp = Stamp::new(Uuid::new_v4(), request.name, actor_id, request.file_id);
        self.ctx.stamp_repo().create(&stamp).await?;

        info!(stamp_id = %stamp.id, name = %stamp.name, "Stamp created");
        self.ctx.publish(StampCreatedEvent::new(stamp.clone()));

        Ok(StampResponse::from(stamp))
    }

    #[instrument(skip(self))]
    pub async fn get_stamp(&self, actor_id: Uuid, stamp_id: Uuid) -> ServiceResult<StampResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_STAMP)
            .await?;

        Ok(StampResponse::from(self.find(stamp_id).await?))
    }

    /// Rename a stamp or replace its image
    ///
    /// Stamps created by someone else need `edit_stamp_created_by_others`.
    #[instrument(skip(self, request))]
    pub async fn update_stamp(
        &self,
        actor_id: Uuid,
        stamp_id: Uuid,
        request: UpdateStampRequest,
    ) -> ServiceResult<()> {
        let permissions = PermissionService::new(self.ctx);
        let actor = permissions
            .require_permission(actor_id, Permissions::EDIT_STAMP)
            .await?;

        let stamp = self.find(stamp_id).await?;
        if !stamp.is_created_by(actor.id)
            && !permissions
                .check_permission(actor.id, Permissions::EDIT_STAMP_CREATED_BY_OTHERS)
                .await?
        {
            return Err(DomainError::NotCreator.into());
        }

        self.ctx
            .stamp_repo()
            .update(
                stamp_id,
                UpdateStampArgs {
                    name: request.name,
                    file_id: request.file_id,
                },
            )
            .await?;

        info!(stamp_id = %stamp_id, "Stamp updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_stamp(&self, actor_id: Uuid, stamp_id: Uuid) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::DELETE_STAMP)
            .await?;

        self.ctx.stamp_repo().delete(stamp_id).await?;
        info!(stamp_id = %stamp_id, "Stamp deleted");
        Ok(())
    }
}
