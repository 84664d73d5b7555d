//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Shared conventions:
//! - a nil id passed to an update or delete is [`DomainError::NilId`];
//! - a nil id passed to a lookup finds nothing;
//! - a nil id passed to a list-by-owner query yields an empty list.

use std::collections::BTreeSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Bot, Channel, Message, MessageStamp, Pin, Stamp, UpdateWebhookArgs, User, UserGroup, Webhook,
};
use crate::error::DomainError;
use crate::events::BotEventType;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by unique name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Create a new user; the name must be unused
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user
    async fn update(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find channel by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Channel>>;

    /// List all channels, oldest first
    async fn list(&self) -> RepoResult<Vec<Channel>>;

    /// Create a new channel; the name must be unused
    async fn create(&self, channel: &Channel) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

/// Pagination options for message queries
#[derive(Debug, Clone, Copy)]
pub struct MessageQuery {
    pub limit: usize,
    pub offset: usize,
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Message>>;

    /// List messages in a channel, newest first
    async fn find_by_channel(&self, channel_id: Uuid, query: MessageQuery)
        -> RepoResult<Vec<Message>>;

    /// Create a new message; the channel must exist
    async fn create(&self, message: &Message) -> RepoResult<()>;
}

// ============================================================================
// Webhook Repository
// ============================================================================

/// Arguments for creating a webhook
#[derive(Debug, Clone)]
pub struct CreateWebhookArgs {
    pub name: String,
    pub description: String,
    pub channel_id: Uuid,
    pub creator_id: Uuid,
    pub secret: String,
}

#[async_trait]
pub trait WebhookRepository: Send + Sync {
    /// Create a webhook together with its active bot user (role `bot`)
    ///
    /// Fails if the name is invalid or the channel does not exist.
    async fn create(&self, args: CreateWebhookArgs) -> RepoResult<Webhook>;

    /// Find webhook by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Webhook>>;

    /// Find the webhook backed by `bot_user_id`
    async fn find_by_bot_user_id(&self, bot_user_id: Uuid) -> RepoResult<Option<Webhook>>;

    /// List every webhook
    async fn list_all(&self) -> RepoResult<Vec<Webhook>>;

    /// List webhooks created by `creator_id`
    async fn list_by_creator(&self, creator_id: Uuid) -> RepoResult<Vec<Webhook>>;

    /// Apply a partial update
    ///
    /// A new channel must exist; a new creator must exist and must not be a
    /// bot. An update with no fields is a no-op.
    async fn update(&self, id: Uuid, args: UpdateWebhookArgs) -> RepoResult<()>;

    /// Delete a webhook and deactivate its bot user
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Star Repository
// ============================================================================

#[async_trait]
pub trait StarRepository: Send + Sync {
    /// Star a channel; starring twice is a no-op
    async fn add_star(&self, user_id: Uuid, channel_id: Uuid) -> RepoResult<()>;

    /// Remove a star; removing a missing star is a no-op
    async fn remove_star(&self, user_id: Uuid, channel_id: Uuid) -> RepoResult<()>;

    /// Channels starred by `user_id`
    async fn stared_channels(&self, user_id: Uuid) -> RepoResult<Vec<Uuid>>;
}

// ============================================================================
// Pin Repository
// ============================================================================

#[async_trait]
pub trait PinRepository: Send + Sync {
    /// Pin a message in its own channel
    ///
    /// Fails with [`DomainError::AlreadyPinned`] if the message is pinned.
    async fn create(&self, message_id: Uuid, user_id: Uuid) -> RepoResult<Pin>;

    /// Find pin by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Pin>>;

    /// List pins in a channel, oldest first
    async fn find_by_channel(&self, channel_id: Uuid) -> RepoResult<Vec<Pin>>;

    /// Unpin
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Message Stamp Repository
// ============================================================================

#[async_trait]
pub trait MessageStampRepository: Send + Sync {
    /// Put a stamp on a message, or press it once more if the user already
    /// used it there
    ///
    /// The message and the stamp must exist.
    async fn add(&self, message_id: Uuid, stamp_id: Uuid, user_id: Uuid)
        -> RepoResult<MessageStamp>;

    /// Take the user's stamp off a message; returns whether one was there
    async fn remove(&self, message_id: Uuid, stamp_id: Uuid, user_id: Uuid) -> RepoResult<bool>;

    /// Stamps on a message, oldest first
    async fn find_by_message(&self, message_id: Uuid) -> RepoResult<Vec<MessageStamp>>;
}

// ============================================================================
// Stamp Repository
// ============================================================================

/// Fields of a stamp update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateStampArgs {
    pub name: Option<String>,
    pub file_id: Option<Uuid>,
}

#[async_trait]
pub trait StampRepository: Send + Sync {
    /// Create a stamp; the name must be unused
    async fn create(&self, stamp: &Stamp) -> RepoResult<()>;

    /// Find stamp by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Stamp>>;

    /// List all stamps, sorted by name
    async fn list(&self) -> RepoResult<Vec<Stamp>>;

    /// Apply a partial update
    async fn update(&self, id: Uuid, args: UpdateStampArgs) -> RepoResult<()>;

    /// Delete a stamp and every use of it on messages
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// User Group Repository
// ============================================================================

#[async_trait]
pub trait UserGroupRepository: Send + Sync {
    /// Create a group; the name must be unused
    async fn create(&self, group: &UserGroup) -> RepoResult<()>;

    /// Find group by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<UserGroup>>;

    /// List all groups, sorted by name
    async fn list(&self) -> RepoResult<Vec<UserGroup>>;

    /// Delete a group and return it as it was
    async fn delete(&self, id: Uuid) -> RepoResult<UserGroup>;
}

// ============================================================================
// Bot Repository
// ============================================================================

/// Arguments for creating a bot
#[derive(Debug, Clone)]
pub struct CreateBotArgs {
    /// User name of the bot user
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub creator_id: Uuid,
    pub subscribe_events: BTreeSet<BotEventType>,
}

#[async_trait]
pub trait BotRepository: Send + Sync {
    /// Create a bot together with its bot user (role `bot`)
    async fn create(&self, args: CreateBotArgs) -> RepoResult<Bot>;

    /// Find bot by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Bot>>;

    /// List every bot
    async fn list(&self) -> RepoResult<Vec<Bot>>;

    /// Active bots subscribed to `event`
    async fn find_by_event(&self, event: BotEventType) -> RepoResult<Vec<Bot>>;
}
