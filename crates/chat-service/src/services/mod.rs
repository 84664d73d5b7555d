//! Business logic services
//!
//! One service per domain area. Every operation takes the acting subject
//! and checks its permission before touching a repository.

pub mod bot;
pub mod channel;
pub mod context;
pub mod error;
pub mod message;
pub mod message_stamp;
pub mod permission;
pub mod pin;
pub mod stamp;
pub mod star;
pub mod user;
pub mod user_group;
pub mod webhook;

#[cfg(test)]
mod test_support;

// Re-export all services for convenience
pub use bot::BotService;
pub use channel::ChannelService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use message_stamp::MessageStampService;
pub use permission::PermissionService;
pub use pin::PinService;
pub use stamp::StampService;
pub use star::StarService;
pub use user::UserService;
pub use user_group::UserGroupService;
pub use webhook::WebhookService;
