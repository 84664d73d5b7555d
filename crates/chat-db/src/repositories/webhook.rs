//! In-memory implementation of WebhookRepository
//!
//! A webhook owns a bot user. Both rows are written under the same locks so
//! the pair is created and retired atomically.

use async_trait::async_trait;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::{
    generate_webhook_bot_name, validate_webhook_name, UpdateWebhookArgs, User, UserState,
    Webhook,
};
use chat_core::error::DomainError;
use chat_core::traits::{CreateWebhookArgs, RepoResult, WebhookRepository};

use crate::pool::DbPool;

use super::error::{channel_not_found, ensure_not_nil, user_not_found};

/// In-memory implementation of WebhookRepository
#[derive(Clone)]
pub struct MemWebhookRepository {
    pool: DbPool,
}

impl MemWebhookRepository {
    /// Create a new MemWebhookRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WebhookRepository for MemWebhookRepository {
    #[instrument(skip(self, args), fields(name = %args.name, channel_id = %args.channel_id))]
    async fn create(&self, args: CreateWebhookArgs) -> RepoResult<Webhook> {
        validate_webhook_name(&args.name)?;

        let mut users = self.pool.users.write();
        let channels = self.pool.channels.read();
        let mut webhooks = self.pool.webhooks.write();

        if !channels.contains(&args.channel_id) {
            return Err(channel_not_found(args.channel_id));
        }
        if !users.contains(&args.creator_id) {
            return Err(user_not_found(args.creator_id));
        }

        let mut bot_name = generate_webhook_bot_name();
        while users.any(|u| u.name == bot_name) {
            bot_name = generate_webhook_bot_name();
        }

        let bot_user = User::new_bot(Uuid::new_v4(), bot_name, args.name.clone());
        let webhook = Webhook::new(
            Uuid::new_v4(),
            bot_user.id,
            args.name,
            args.description,
            args.channel_id,
            args.creator_id,
            args.secret,
        );

        if !users.insert(bot_user.id, bot_user) {
            return Err(DomainError::DatabaseError("duplicate bot user id".to_string()));
        }
        if !webhooks.insert(webhook.id, webhook.clone()) {
            users.remove(&webhook.bot_user_id);
            return Err(DomainError::DatabaseError("duplicate webhook id".to_string()));
        }

        tracing::debug!(webhook_id = %webhook.id, bot_user_id = %webhook.bot_user_id, "Webhook created");
        Ok(webhook)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Webhook>> {
        Ok(self.pool.webhooks.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_by_bot_user_id(&self, bot_user_id: Uuid) -> RepoResult<Option<Webhook>> {
        if bot_user_id.is_nil() {
            return Ok(None);
        }
        Ok(self
            .pool
            .webhooks
            .read()
            .find(|w| w.bot_user_id == bot_user_id)
            .cloned())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Webhook>> {
        Ok(self
            .pool
            .webhooks
            .read()
            .ordered()
            .into_iter()
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_by_creator(&self, creator_id: Uuid) -> RepoResult<Vec<Webhook>> {
        if creator_id.is_nil() {
            return Ok(Vec::new());
        }
        Ok(self
            .pool
            .webhooks
            .read()
            .filtered(|w| w.creator_id == creator_id)
            .into_iter()
            .cloned()
            .collect())
    }

    #[instrument(skip(self, args))]
    async fn update(&self, id: Uuid, args: UpdateWebhookArgs) -> RepoResult<()> {
        ensure_not_nil(id)?;

        let mut users = self.pool.users.write();
        let channels = self.pool.channels.read();
        let mut webhooks = self.pool.webhooks.write();

        let current = webhooks
            .get(&id)
            .ok_or(DomainError::WebhookNotFound(id))?;
        if args.is_empty() {
            return Ok(());
        }
        let bot_user_id = current.bot_user_id;

        if let Some(name) = &args.name {
            validate_webhook_name(name)?;
        }
        if let Some(channel_id) = args.channel_id {
            if !channels.contains(&channel_id) {
                return Err(channel_not_found(channel_id));
            }
        }
        if let Some(creator_id) = args.creator_id {
            let creator = users.get(&creator_id).ok_or_else(|| user_not_found(creator_id))?;
            if creator.is_bot() {
                return Err(DomainError::InvalidCreator(creator_id));
            }
        }

        let webhook = webhooks
            .get_mut(&id)
            .ok_or(DomainError::WebhookNotFound(id))?;
        if let Some(name) = args.name {
            if let Some(bot_user) = users.get_mut(&bot_user_id) {
                bot_user.set_display_name(name.clone());
            }
            webhook.name = name;
        }
        if let Some(description) = args.description {
            webhook.description = description;
        }
        if let Some(channel_id) = args.channel_id {
            webhook.channel_id = channel_id;
        }
        if let Some(secret) = args.secret {
            webhook.secret = secret;
        }
        if let Some(creator_id) = args.creator_id {
            webhook.creator_id = creator_id;
        }
        webhook.updated_at = Utc::now();

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        ensure_not_nil(id)?;

        let mut users = self.pool.users.write();
        let mut webhooks = self.pool.webhooks.write();

        let webhook = webhooks
            .remove(&id)
            .ok_or(DomainError::WebhookNotFound(id))?;
        if let Some(bot_user) = users.get_mut(&webhook.bot_user_id) {
            bot_user.set_state(UserState::Deactivated);
        }

        tracing::debug!(webhook_id = %id, "Webhook deleted");
        Ok(())
    }
}
