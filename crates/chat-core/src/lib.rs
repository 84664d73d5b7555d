//! # chat-core
//!
//! Domain layer containing entities, the permission catalog, RBAC registries,
//! repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (storage, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod rbac;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    generate_webhook_bot_name, Bot, BotState, Channel, Message, MessageStamp, Pin, Stamp,
    UpdateWebhookArgs, User, UserGroup, UserState, Webhook,
};
pub use error::{DomainError, RbacError};
pub use events::{BotEventType, DomainEvent};
pub use rbac::{Permission, PermissionRegistry, Rbac, RbacBuilder, Role, RoleRegistry};
pub use traits::{
    BotRepository, ChannelRepository, CreateBotArgs, CreateWebhookArgs, MessageQuery,
    MessageRepository, MessageStampRepository, PinRepository, RepoResult, StampRepository,
    StarRepository, UpdateStampArgs, UserGroupRepository, UserRepository, WebhookRepository,
};
pub use value_objects::Permissions;
