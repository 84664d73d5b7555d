//! # chat-service
//!
//! Application layer containing business logic, services, DTOs, and the
//! bot event pipeline.

pub mod dto;
pub mod events;
pub mod services;

pub use dto::*;
pub use events::{BotEventDispatcher, BotMulticaster, EventBus, TracingMulticaster};
pub use services::{
    BotService, ChannelService, MessageService, MessageStampService, PermissionService,
    PinService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StampService, StarService, UserGroupService, UserService, WebhookService,
};
