//! Pin service
//!
//! Pins mark messages in a channel; every pin response embeds its message.

use chat_core::entities::Pin;
use chat_core::{DomainError, Permissions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{MessageResponse, PinResponse};

use super::channel::ChannelService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::message::MessageService;
use super::permission::PermissionService;

/// Pin service
pub struct PinService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PinService<'a> {
    /// Create a new PinService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn to_response(&self, pin: Pin) -> ServiceResult<PinResponse> {
        let message = MessageService::new(self.ctx)
            .get_message_entity(pin.message_id)
            .await?;
        Ok(PinResponse {
            id: pin.id,
            channel_id: pin.channel_id,
            user_id: pin.user_id,
            created_at: pin.created_at,
            message: MessageResponse::from(message),
        })
    }

    /// Pins of a channel
    #[instrument(skip(self))]
    pub async fn list_pins(
        &self,
        actor_id: Uuid,
        channel_id: Uuid,
    ) -> ServiceResult<Vec<PinResponse>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_MESSAGE)
            .await?;

        ChannelService::new(self.ctx)
            .get_channel_entity(channel_id)
            .await?;

        let pins = self.ctx.pin_repo().find_by_channel(channel_id).await?;
        let mut responses = Vec::with_capacity(pins.len());
        for pin in pins {
            responses.push(self.to_response(pin).await?);
        }
        Ok(responses)
    }

    /// Pin a message of `channel_id`
    #[instrument(skip(self))]
    pub async fn create_pin(
        &self,
        actor_id: Uuid,
        channel_id: Uuid,
        message_id: Uuid,
    ) -> ServiceResult<PinResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::CREATE_MESSAGE_PIN)
            .await?;

        let message = MessageService::new(self.ctx)
            .get_message_entity(message_id)
            .await?;
        if message.channel_id != channel_id {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        let pin = self.ctx.pin_repo().create(message_id, actor_id).await?;
        info!(pin_id = %pin.id, message_id = %message_id, "Message pinned");

        Ok(PinResponse {
            id: pin.id,
            channel_id: pin.channel_id,
            user_id: pin.user_id,
            created_at: pin.created_at,
            message: MessageResponse::from(message),
        })
    }

    /// Get pin by ID
    #[instrument(skip(self))]
    pub async fn get_pin(&self, actor_id: Uuid, pin_id: Uuid) -> ServiceResult<PinResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_MESSAGE)
            .await?;

        let pin = self
            .ctx
            .pin_repo()
            .find_by_id(pin_id)
            .await?
            .ok_or(DomainError::PinNotFound(pin_id))?;
        self.to_response(pin).await
    }

    /// Unpin
    #[instrument(skip(self))]
    pub async fn delete_pin(&self, actor_id: Uuid, pin_id: Uuid) -> ServiceResult<()> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::DELETE_MESSAGE_PIN)
            .await?;

        self.ctx.pin_repo().delete(pin_id).await?;
        info!(pin_id = %pin_id, "Pin removed");
        Ok(())
    }
}
