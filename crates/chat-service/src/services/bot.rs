//! Bot service

use chat_core::traits::CreateBotArgs;
use chat_core::Permissions;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{BotResponse, CreateBotRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Bot service
pub struct BotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BotService<'a> {
    /// Create a new BotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_bots(&self, actor_id: Uuid) -> ServiceResult<Vec<BotResponse>> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_BOT)
            .await?;

        let bots = self.ctx.bot_repo().list().await?;
        Ok(bots.into_iter().map(BotResponse::from).collect())
    }

    /// Create a bot, with its bot user, owned by the actor
    #[instrument(skip(self, request))]
    pub async fn create_bot(
        &self,
        actor_id: Uuid,
        request: CreateBotRequest,
    ) -> ServiceResult<BotResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::CREATE_BOT)
            .await?;

        let bot = self
            .ctx
            .bot_repo()
            .create(CreateBotArgs {
                name: request.name,
                display_name: request.display_name,
                description: request.description,
                creator_id: actor_id,
                subscribe_events: request.subscribe_events.into_iter().collect(),
            })
            .await?;

        info!(bot_id = %bot.id, bot_user_id = %bot.bot_user_id, "Bot created");
        Ok(BotResponse::from(bot))
    }
}

#[cfg(test)]
mod tests {
    use chat_core::rbac::roles;
    use chat_core::BotEventType;

    use super::super::test_support;
    use super::*;

    fn request(name: &str) -> CreateBotRequest {
        CreateBotRequest {
            name: name.to_string(),
            display_name: "Greeter".to_string(),
            description: "says hi".to_string(),
            subscribe_events: vec![BotEventType::UserCreated, BotEventType::UserCreated],
        }
    }

    #[tokio::test]
    async fn test_create_bot() {
        let ctx = test_support::context();
        let manager = test_support::user(&ctx, roles::MANAGE_BOT).await;
        let service = BotService::new(&ctx);

        let bot = service.create_bot(manager.id, request("greeter")).await.unwrap();
        assert_eq!(bot.subscribe_events, vec![BotEventType::UserCreated]);
        assert_eq!(bot.creator_id, manager.id);

        let bot_user = ctx.user_repo().find_by_id(bot.bot_user_id).await.unwrap().unwrap();
        assert!(bot_user.is_bot());
        assert_eq!(service.list_bots(manager.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_writer_cannot_create_bot() {
        let ctx = test_support::context();
        let writer = test_support::user(&ctx, roles::WRITE).await;

        let err = BotService::new(&ctx)
            .create_bot(writer.id, request("greeter"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PERMISSIONS");
    }
}
