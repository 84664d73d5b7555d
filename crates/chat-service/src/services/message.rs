//! Message service
//!
//! Handles posting and reading channel messages.

use chat_core::entities::Message;
use chat_core::traits::MessageQuery;
use chat_core::{DomainError, Permissions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{MessageListQuery, MessageResponse, PostMessageRequest};

use super::channel::ChannelService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List messages of a channel, newest first
    #[instrument(skip(self, query))]
    pub async fn list_messages(
        &self,
        actor_id: Uuid,
        channel_id: Uuid,
        query: MessageListQuery,
    ) -> ServiceResult<Vec<MessageResponse>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_MESSAGE)
            .await?;

        ChannelService::new(self.ctx)
            .get_channel_entity(channel_id)
            .await?;

        let defaults = MessageQuery::default();
        let query = MessageQuery {
            limit: query.limit.unwrap_or(defaults.limit),
            offset: query.offset.unwrap_or(defaults.offset),
        };

        let messages = self
            .ctx
            .message_repo()
            .find_by_channel(channel_id, query)
            .await?;
        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    /// Post a message to a channel
    #[instrument(skip(self, request))]
    pub async fn post_message(
        &self,
        actor_id: Uuid,
        channel_id: Uuid,
        request: PostMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::POST_MESSAGE)
            .await?;

        let message = Message::new(Uuid::new_v4(), channel_id, actor_id, request.content);
        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, channel_id = %channel_id, "Message posted");
        Ok(MessageResponse::from(message))
    }

    /// Get message by ID
    #[instrument(skip(self))]
    pub async fn get_message(
        &self,
        actor_id: Uuid,
        message_id: Uuid,
    ) -> ServiceResult<MessageResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_MESSAGE)
            .await?;

        let message = self.get_message_entity(message_id).await?;
        Ok(MessageResponse::from(message))
    }

    /// Get message entity by ID
    pub async fn get_message_entity(&self, message_id: Uuid) -> ServiceResult<Message> {
        Ok(self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?)
    }
}
