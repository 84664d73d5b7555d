//! In-memory implementation of BotRepository

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use chat_core::entities::{validate_user_name, Bot, User};
use chat_core::error::DomainError;
use chat_core::events::BotEventType;
use chat_core::traits::{BotRepository, CreateBotArgs, RepoResult};

use crate::pool::DbPool;

use super::error::user_not_found;

/// In-memory implementation of BotRepository
#[derive(Clone)]
pub struct MemBotRepository {
    pool: DbPool,
}

impl MemBotRepository {
    /// Create a new MemBotRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BotRepository for MemBotRepository {
    #[instrument(skip(self, args), fields(name = %args.name, creator_id = %args.creator_id))]
    async fn create(&self, args: CreateBotArgs) -> RepoResult<Bot> {
        validate_user_name(&args.name)?;

        let mut users = self.pool.users.write();
        let mut bots = self.pool.bots.write();

        let creator = users
            .get(&args.creator_id)
            .ok_or_else(|| user_not_found(args.creator_id))?;
        if creator.is_bot() {
            return Err(DomainError::InvalidCreator(args.creator_id));
        }
        if users.any(|u| u.name == args.name) {
            return Err(DomainError::UserNameExists(args.name));
        }

        let bot_user = User::new_bot(Uuid::new_v4(), args.name.clone(), args.display_name);
        let bot = Bot::new(
            Uuid::new_v4(),
            bot_user.id,
            args.name,
            args.description,
            args.creator_id,
            args.subscribe_events,
        );

        if !users.insert(bot_user.id, bot_user) {
            return Err(DomainError::DatabaseError("duplicate bot user id".to_string()));
        }
        if !bots.insert(bot.id, bot.clone()) {
            users.remove(&bot.bot_user_id);
            return Err(DomainError::DatabaseError("duplicate bot id".to_string()));
        }

        tracing::debug!(bot_id = %bot.id, "Bot created");
        Ok(bot)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Bot>> {
        Ok(self.pool.bots.read().get(&id).cloned())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Bot>> {
        Ok(self.pool.bots.read().ordered().into_iter().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_by_event(&self, event: BotEventType) -> RepoResult<Vec<Bot>> {
        Ok(self
            .pool
            .bots
            .read()
            .filtered(|b| b.receives(event))
            .into_iter()
            .cloned()
            .collect())
    }
}
