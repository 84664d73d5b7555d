//! Service context - dependency container for services
//!
//! Holds all repositories, the access-control model, and the event bus.

use std::sync::Arc;

use chat_common::auth::JwtService;
use chat_core::traits::{
    BotRepository, ChannelRepository, MessageRepository, MessageStampRepository, PinRepository,
    StampRepository, StarRepository, UserGroupRepository, UserRepository, WebhookRepository,
};
use chat_core::{DomainEvent, Rbac};
use chat_db::{
    DbPool, MemBotRepository, MemChannelRepository, MemMessageRepository,
    MemMessageStampRepository, MemPinRepository, MemStampRepository, MemStarRepository,
    MemUserGroupRepository, MemUserRepository, MemWebhookRepository,
};

use crate::events::EventBus;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories
/// - The immutable RBAC model
/// - JWT service for authentication
/// - The domain event bus
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    channel_repo: Arc<dyn ChannelRepository>,
    message_repo: Arc<dyn MessageRepository>,
    webhook_repo: Arc<dyn WebhookRepository>,
    star_repo: Arc<dyn StarRepository>,
    pin_repo: Arc<dyn PinRepository>,
    stamp_repo: Arc<dyn StampRepository>,
    message_stamp_repo: Arc<dyn MessageStampRepository>,
    user_group_repo: Arc<dyn UserGroupRepository>,
    bot_repo: Arc<dyn BotRepository>,

    // Access control
    rbac: Arc<Rbac>,

    // Services
    jwt_service: Arc<JwtService>,
    events: EventBus,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the webhook repository
    pub fn webhook_repo(&self) -> &dyn WebhookRepository {
        self.webhook_repo.as_ref()
    }

    /// Get the star repository
    pub fn star_repo(&self) -> &dyn StarRepository {
        self.star_repo.as_ref()
    }

    /// Get the pin repository
    pub fn pin_repo(&self) -> &dyn PinRepository {
        self.pin_repo.as_ref()
    }

    /// Get the stamp repository
    pub fn stamp_repo(&self) -> &dyn StampRepository {
        self.stamp_repo.as_ref()
    }

    /// Get the message stamp repository
    pub fn message_stamp_repo(&self) -> &dyn MessageStampRepository {
        self.message_stamp_repo.as_ref()
    }

    /// Get the user group repository
    pub fn user_group_repo(&self) -> &dyn UserGroupRepository {
        self.user_group_repo.as_ref()
    }

    /// Get the bot repository
    pub fn bot_repo(&self) -> &dyn BotRepository {
        self.bot_repo.as_ref()
    }

    /// Shared handle to the bot repository, for the dispatcher
    pub fn bot_repo_handle(&self) -> Arc<dyn BotRepository> {
        Arc::clone(&self.bot_repo)
    }

    // === Access control ===

    /// Get the RBAC model
    pub fn rbac(&self) -> &Rbac {
        self.rbac.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the event bus
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Publish a domain event
    pub fn publish(&self, event: impl Into<DomainEvent>) {
        self.events.publish(event);
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("roles", &self.rbac.roles().count())
            .field("event_subscribers", &self.events.subscriber_count())
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    webhook_repo: Option<Arc<dyn WebhookRepository>>,
    star_repo: Option<Arc<dyn StarRepository>>,
    pin_repo: Option<Arc<dyn PinRepository>>,
    stamp_repo: Option<Arc<dyn StampRepository>>,
    message_stamp_repo: Option<Arc<dyn MessageStampRepository>>,
    user_group_repo: Option<Arc<dyn UserGroupRepository>>,
    bot_repo: Option<Arc<dyn BotRepository>>,
    rbac: Option<Arc<Rbac>>,
    jwt_service: Option<Arc<JwtService>>,
    events: Option<EventBus>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the in-memory repositories over `pool` for every repository
    /// not already set
    pub fn in_memory(mut self, pool: &DbPool) -> Self {
        self.user_repo
            .get_or_insert_with(|| Arc::new(MemUserRepository::new(pool.clone())));
        self.channel_repo
            .get_or_insert_with(|| Arc::new(MemChannelRepository::new(pool.clone())));
        self.message_repo
            .get_or_insert_with(|| Arc::new(MemMessageRepository::new(pool.clone())));
        self.webhook_repo
            .get_or_insert_with(|| Arc::new(MemWebhookRepository::new(pool.clone())));
        self.star_repo
            .get_or_insert_with(|| Arc::new(MemStarRepository::new(pool.clone())));
        self.pin_repo
            .get_or_insert_with(|| Arc::new(MemPinRepository::new(pool.clone())));
        self.stamp_repo
            .get_or_insert_with(|| Arc::new(MemStampRepository::new(pool.clone())));
        self.message_stamp_repo
            .get_or_insert_with(|| Arc::new(MemMessageStampRepository::new(pool.clone())));
        self.user_group_repo
            .get_or_insert_with(|| Arc::new(MemUserGroupRepository::new(pool.clone())));
        self.bot_repo
            .get_or_insert_with(|| Arc::new(MemBotRepository::new(pool.clone())));
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn webhook_repo(mut self, repo: Arc<dyn WebhookRepository>) -> Self {
        self.webhook_repo = Some(repo);
        self
    }

    pub fn star_repo(mut self, repo: Arc<dyn StarRepository>) -> Self {
        self.star_repo = Some(repo);
        self
    }

    pub fn pin_repo(mut self, repo: Arc<dyn PinRepository>) -> Self {
        self.pin_repo = Some(repo);
        self
    }

    pub fn stamp_repo(mut self, repo: Arc<dyn StampRepository>) -> Self {
        self.stamp_repo = Some(repo);
        self
    }

    pub fn message_stamp_repo(mut self, repo: Arc<dyn MessageStampRepository>) -> Self {
        self.message_stamp_repo = Some(repo);
        self
    }

    pub fn user_group_repo(mut self, repo: Arc<dyn UserGroupRepository>) -> Self {
        self.user_group_repo = Some(repo);
        self
    }

    pub fn bot_repo(mut self, repo: Arc<dyn BotRepository>) -> Self {
        self.bot_repo = Some(repo);
        self
    }

    pub fn rbac(mut self, rbac: Arc<Rbac>) -> Self {
        self.rbac = Some(rbac);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn events(mut self, events: EventBus) -> Self {
        self.events = Some(events);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            channel_repo: required(self.channel_repo, "channel_repo")?,
            message_repo: required(self.message_repo, "message_repo")?,
            webhook_repo: required(self.webhook_repo, "webhook_repo")?,
            star_repo: required(self.star_repo, "star_repo")?,
            pin_repo: required(self.pin_repo, "pin_repo")?,
            stamp_repo: required(self.stamp_repo, "stamp_repo")?,
            message_stamp_repo: required(self.message_stamp_repo, "message_stamp_repo")?,
            user_group_repo: required(self.user_group_repo, "user_group_repo")?,
            bot_repo: required(self.bot_repo, "bot_repo")?,
            rbac: required(self.rbac, "rbac")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            events: self.events.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_rbac() {
        let pool = chat_db::create_pool();
        let err = ServiceContextBuilder::new()
            .in_memory(&pool)
            .jwt_service(Arc::new(JwtService::new("secret", 60)))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("rbac"));
    }

    #[test]
    fn test_build_in_memory() {
        let pool = chat_db::create_pool();
        let ctx = ServiceContext::builder()
            .in_memory(&pool)
            .rbac(Arc::new(Rbac::standard().unwrap()))
            .jwt_service(Arc::new(JwtService::new("secret", 60)))
            .build()
            .unwrap();
        assert!(ctx.rbac().role("admin").is_some());
    }
}
