//! Repository implementations
//!
//! In-memory implementations of the repository traits defined in chat-core.
//! Each repository handles storage operations for a specific domain entity.

mod bot;
mod channel;
mod error;
mod message;
mod message_stamp;
mod pin;
mod stamp;
mod star;
mod user;
mod user_group;
mod webhook;

pub use bot::MemBotRepository;
pub use channel::MemChannelRepository;
pub use message::MemMessageRepository;
pub use message_stamp::MemMessageStampRepository;
pub use pin::MemPinRepository;
pub use stamp::MemStampRepository;
pub use star::MemStarRepository;
pub use user::MemUserRepository;
pub use user_group::MemUserGroupRepository;
pub use webhook::MemWebhookRepository;
