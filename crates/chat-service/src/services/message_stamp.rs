//! Message stamp service
//!
//! Users press stamps on messages. Pressing the same stamp again raises its
//! count up to a fixed cap.

use chat_core::Permissions;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::MessageStampResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::message::MessageService;
use super::permission::PermissionService;

/// Message stamp service
pub struct MessageStampService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageStampService<'a> {
    /// Create a new MessageStampService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Stamps pressed on a message
    #[instrument(skip(self))]
    pub async fn list_message_stamps(
        &self,
        actor_id: Uuid,
        message_id: Uuid,
    ) -> ServiceResult<Vec<MessageStampResponse>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_MESSAGE_STAMP)
            .await?;

        MessageService::new(self.ctx)
            .get_message_entity(message_id)
            .await?;

        let stamps = self
            .ctx
            .message_stamp_repo()
            .find_by_message(message_id)
            .await?;
        Ok(stamps.into_iter().map(MessageStampResponse::from).collect())
    }

    /// Press a stamp on a message
    #[instrument(skip(self))]
    pub async fn add_message_stamp(
        &self,
        actor_id: Uuid,
        message_id: Uuid,
        stamp_id: Uuid,
    ) -> ServiceResult<MessageStampResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::ADD_MESSAGE_STAMP)
            .await?;

        let stamp = self
            .ctx
            .message_stamp_repo()
            .add(message_id, stamp_id, actor_id)
            .await?;
        info!(
            message_id = %message_id,
            stamp_id = %stamp_id,
            count = stamp.count,
            "Stamp added to message"
        );
        Ok(MessageStampResponse::from(stamp))
    }

    /// Take back the actor's stamp from a message
    #[instrument(skip(self))]
    pub async fn remove_message_stamp(
        &self,
        actor_id: Uuid,
        message_id: Uuid,
        stamp_id: Uuid,
    ) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::REMOVE_MESSAGE_STAMP)
            .await?;

        MessageService::new(self.ctx)
            .get_message_entity(message_id)
            .await?;

        if self
            .ctx
            .message_stamp_repo()
            .remove(message_id, stamp_id, actor_id)
            .await?
        {
            info!(message_id = %message_id, stamp_id = %stamp_id, "Stamp removed from message");
        }
        Ok(())
    }
}
