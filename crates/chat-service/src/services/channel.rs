//! Channel service
//!
//! Handles channel creation and queries.

use chat_core::entities::Channel;
use chat_core::events::ChannelCreatedEvent;
use chat_core::{DomainError, Permissions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{ChannelResponse, CreateChannelRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Channel service
pub struct ChannelService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChannelService<'a> {
    /// Create a new ChannelService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every channel
    #[instrument(skip(self))]
    pub async fn list_channels(&self, actor_id: Uuid) -> ServiceResult<Vec<ChannelResponse>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_CHANNEL)
            .await?;

        let channels = self.ctx.channel_repo().list().await?;
        Ok(channels.into_iter().map(ChannelResponse::from).collect())
    }

    /// Create a new channel
    #[instrument(skip(self, request))]
    pub async fn create_channel(
        &self,
        actor_id: Uuid,
        request: CreateChannelRequest,
    ) -> ServiceResult<ChannelResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::CREATE_CHANNEL)
            .await?;

        let mut channel = Channel::new(Uuid::new_v4(), request.name, actor_id);
        if let Some(topic) = request.topic {
            channel.set_topic(topic);
        }
        self.ctx.channel_repo().create(&channel).await?;

        info!(channel_id = %channel.id, "Channel created");
        self.ctx.publish(ChannelCreatedEvent::new(channel.clone()));

        Ok(ChannelResponse::from(channel))
    }

    /// Get channel by ID
    #[instrument(skip(self))]
    pub async fn get_channel(
        &self,
        actor_id: Uuid,
        channel_id: Uuid,
    ) -> ServiceResult<ChannelResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_CHANNEL)
            .await?;

        let channel = self.get_channel_entity(channel_id).await?;
        Ok(ChannelResponse::from(channel))
    }

    /// Get channel entity by ID
    #[instrument(skip(self))]
    pub async fn get_channel_entity(&self, channel_id: Uuid) -> ServiceResult<Channel> {
        Ok(self
            .ctx
            .channel_repo()
            .find_by_id(channel_id)
            .await?
            .ok_or(DomainError::ChannelNotFound(channel_id))?)
    }
}

#[cfg(test)]
mod tests {
    use chat_core::rbac::roles;

    use super::super::test_support;
    use super::*;

    fn request(name: &str) -> CreateChannelRequest {
        CreateChannelRequest {
            name: name.to_string(),
            topic: Some("announcements".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_channel() {
        let ctx = test_support::context();
        let writer = test_support::user(&ctx, roles::WRITE).await;
        let mut rx = ctx.events().subscribe();
        let service = ChannelService::new(&ctx);

        let channel = service.create_channel(writer.id, request("general")).await.unwrap();
        assert_eq!(channel.topic, "announcements");
        assert_eq!(channel.creator_id, writer.id);

        let events = test_support::drain(&mut rx);
        assert_eq!(events[0].event_type(), "CHANNEL_CREATED");

        let found = service.get_channel(writer.id, channel.id).await.unwrap();
        assert_eq!(found.name, "general");
    }

    #[tokio::test]
    async fn test_reader_cannot_create_channel() {
        let ctx = test_support::context();
        let reader = test_support::user(&ctx, roles::READ).await;

        let err = ChannelService::new(&ctx)
            .create_channel(reader.id, request("general"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert!(ctx.channel_repo().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_channel() {
        let ctx = test_support::context();
        let reader = test_support::user(&ctx, roles::READ).await;

        let err = ChannelService::new(&ctx)
            .get_channel(reader.id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_CHANNEL");
    }
}
