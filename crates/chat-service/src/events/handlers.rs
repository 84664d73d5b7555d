//! Per-event bot handlers
//!
//! Each handler resolves the subscribed bots, builds the event payload and
//! hands both to the multicaster in one call.

use serde::Serialize;
use thiserror::Error;

use chat_core::events::{
    BotEventType, ChannelCreatedEvent, DomainEvent, StampCreatedEvent, UserCreatedEvent,
    UserGroupCreatedEvent, UserGroupDeletedEvent,
};
use chat_core::traits::BotRepository;
use chat_core::DomainError;

use super::multicaster::BotMulticaster;
use super::payload::{
    ChannelCreatedPayload, StampCreatedPayload, UserCreatedPayload, UserGroupCreatedPayload,
    UserGroupDeletedPayload,
};

/// Failure while dispatching one event
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to get bots: {0}")]
    GetBots(#[source] DomainError),

    #[error("failed to encode payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("failed to multicast: {0}")]
    Multicast(#[source] anyhow::Error),
}

/// What a handler needs from its surroundings
pub struct HandlerContext<'a> {
    pub bots: &'a dyn BotRepository,
    pub multicaster: &'a dyn BotMulticaster,
}

impl HandlerContext<'_> {
    /// Look up subscribers and multicast `payload` to them
    ///
    /// Returns the number of bots the payload went to.
    async fn deliver<P: Serialize>(
        &self,
        event: BotEventType,
        payload: &P,
    ) -> Result<usize, DispatchError> {
        let bots = self
            .bots
            .find_by_event(event)
            .await
            .map_err(DispatchError::GetBots)?;
        if bots.is_empty() {
            return Ok(0);
        }

        let payload = serde_json::to_value(payload)?;
        self.multicaster
            .multicast(event, payload, &bots)
            .await
            .map_err(DispatchError::Multicast)?;
        Ok(bots.len())
    }
}

/// Route a domain event to its handler
pub async fn handle(ctx: &HandlerContext<'_>, event: &DomainEvent) -> Result<usize, DispatchError> {
    match event {
        DomainEvent::UserCreated(e) => user_created(ctx, e).await,
        DomainEvent::ChannelCreated(e) => channel_created(ctx, e).await,
        DomainEvent::StampCreated(e) => stamp_created(ctx, e).await,
        DomainEvent::UserGroupCreated(e) => user_group_created(ctx, e).await,
        DomainEvent::UserGroupDeleted(e) => user_group_deleted(ctx, e).await,
    }
}

pub async fn user_created(
    ctx: &HandlerContext<'_>,
    event: &UserCreatedEvent,
) -> Result<usize, DispatchError> {
    let payload = UserCreatedPayload::new(event.timestamp, &event.user);
    ctx.deliver(BotEventType::UserCreated, &payload).await
}

pub async fn channel_created(
    ctx: &HandlerContext<'_>,
    event: &ChannelCreatedEvent,
) -> Result<usize, DispatchError> {
    let payload = ChannelCreatedPayload::new(event.timestamp, &event.channel);
    ctx.deliver(BotEventType::ChannelCreated, &payload).await
}

pub async fn stamp_created(
    ctx: &HandlerContext<'_>,
    event: &StampCreatedEvent,
) -> Result<usize, DispatchError> {
    let payload = StampCreatedPayload::new(event.timestamp, &event.stamp);
    ctx.deliver(BotEventType::StampCreated, &payload).await
}

pub async fn user_group_created(
    ctx: &HandlerContext<'_>,
    event: &UserGroupCreatedEvent,
) -> Result<usize, DispatchError> {
    let payload = UserGroupCreatedPayload::new(event.timestamp, &event.group);
    ctx.deliver(BotEventType::UserGroupCreated, &payload).await
}

pub async fn user_group_deleted(
    ctx: &HandlerContext<'_>,
    event: &UserGroupDeletedEvent,
) -> Result<usize, DispatchError> {
    let payload = UserGroupDeletedPayload::new(event.timestamp, &event.group);
    ctx.deliver(BotEventType::UserGroupDeleted, &payload).await
}
