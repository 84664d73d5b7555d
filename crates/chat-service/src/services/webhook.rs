//! Webhook service
//!
//! Webhooks are owned by their creator; editing or deleting someone
//! else's webhook needs `access_others_webhook`.

use chat_core::entities::{UpdateWebhookArgs, User, Webhook};
use chat_core::traits::CreateWebhookArgs;
use chat_core::{DomainError, Permissions};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateWebhookRequest, UpdateWebhookRequest, WebhookResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Webhook service
pub struct WebhookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookService<'a> {
    /// Create a new WebhookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, webhook_id: Uuid) -> ServiceResult<Webhook> {
        Ok(self
            .ctx
            .webhook_repo()
            .find_by_id(webhook_id)
            .await?
            .ok_or(DomainError::WebhookNotFound(webhook_id))?)
    }

    /// The actor must own the webhook or be allowed to manage others'
    async fn ensure_owner(&self, actor: &User, webhook: &Webhook) -> ServiceResult<()> {
        if webhook.is_created_by(actor.id)
            || PermissionService::new(self.ctx)
                .check_permission(actor.id, Permissions::ACCESS_OTHERS_WEBHOOK)
                .await?
        {
            Ok(())
        } else {
            Err(DomainError::NotCreator.into())
        }
    }

    /// List the actor's webhooks, or every webhook when `all` is set
    #[instrument(skip(self))]
    pub async fn list_webhooks(
        &self,
        actor_id: Uuid,
        all: bool,
    ) -> ServiceResult<Vec<WebhookResponse>> {
        let required = if all {
            Permissions::GET_WEBHOOK | Permissions::ACCESS_OTHERS_WEBHOOK
        } else {
            Permissions::GET_WEBHOOK
        };
        PermissionService::new(self.ctx)
            .require_permission(actor_id, required)
            .await?;

        let webhooks = if all {
            self.ctx.webhook_repo().list_all().await?
        } else {
            self.ctx.webhook_repo().list_by_creator(actor_id).await?
        };
        Ok(webhooks.into_iter().map(WebhookResponse::from).collect())
    }

    /// Create a webhook owned by the actor
    #[instrument(skip(self, request))]
    pub async fn create_webhook(
        &self,
        actor_id: Uuid,
        request: CreateWebhookRequest,
    ) -> ServiceResult<WebhookResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::CREATE_WEBHOOK)
            .await?;

        let webhook = self
            .ctx
            .webhook_repo()
            .create(CreateWebhookArgs {
                name: request.name,
                description: request.description,
                channel_id: request.channel_id,
                creator_id: actor_id,
                secret: request.secret,
            })
            .await?;

        info!(webhook_id = %webhook.id, bot_user_id = %webhook.bot_user_id, "Webhook created");
        Ok(WebhookResponse::from(webhook))
    }

    /// Get webhook by ID
    #[instrument(skip(self))]
    pub async fn get_webhook(
        &self,
        actor_id: Uuid,
        webhook_id: Uuid,
    ) -> ServiceResult<WebhookResponse> {
        PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::GET_WEBHOOK)
            .await?;

        Ok(WebhookResponse::from(self.find(webhook_id).await?))
    }

    /// Update a webhook; absent fields stay unchanged
    #[instrument(skip(self, request))]
    pub async fn update_webhook(
        &self,
        actor_id: Uuid,
        webhook_id: Uuid,
        request: UpdateWebhookRequest,
    ) -> ServiceResult<()> {
        let actor = PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::EDIT_WEBHOOK)
            .await?;

        let webhook = self.find(webhook_id).await?;
        self.ensure_owner(&actor, &webhook).await?;

        let args = UpdateWebhookArgs {
            name: request.name,
            description: request.description,
            channel_id: request.channel_id,
            secret: request.secret,
            creator_id: request.owner_id,
        };
        self.ctx.webhook_repo().update(webhook_id, args).await?;

        info!(webhook_id = %webhook_id, "Webhook updated");
        Ok(())
    }

    /// Delete a webhook and deactivate its bot user
    #[instrument(skip(self))]
    pub async fn delete_webhook(&self, actor_id: Uuid, webhook_id: Uuid) -> ServiceResult<()> {
        let actor = PermissionService::new(self.ctx)
            .require_permission(actor_id, Permissions::DELETE_WEBHOOK)
            .await?;

        let webhook = self.find(webhook_id).await?;
        self.ensure_owner(&actor, &webhook).await?;

        self.ctx.webhook_repo().delete(webhook_id).await?;
        info!(webhook_id = %webhook_id, "Webhook deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chat_core::entities::Channel;
    use chat_core::rbac::roles;

    use super::super::test_support;
    use super::*;

    async fn channel(ctx: &ServiceContext, creator_id: Uuid) -> Channel {
        let channel = Channel::new(Uuid::new_v4(), "general".to_string(), creator_id);
        ctx.channel_repo().create(&channel).await.unwrap();
        channel
    }

    fn request(channel_id: Uuid) -> CreateWebhookRequest {
        CreateWebhookRequest {
            name: "deploy".to_string(),
            description: "deploy results".to_string(),
            channel_id,
            secret: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_own() {
        let ctx = test_support::context();
        let owner = test_support::user(&ctx, roles::USER).await;
        let channel = channel(&ctx, owner.id).await;
        let service = WebhookService::new(&ctx);

        let webhook = service.create_webhook(owner.id, request(channel.id)).await.unwrap();
        assert!(webhook.secure);
        assert_eq!(webhook.owner_id, owner.id);

        let own = service.list_webhooks(owner.id, false).await.unwrap();
        assert_eq!(own.len(), 1);

        let err = service.list_webhooks(owner.id, true).await.unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_writer_cannot_create() {
        let ctx = test_support::context();
        let writer = test_support::user(&ctx, roles::WRITE).await;
        let channel = channel(&ctx, writer.id).await;

        let err = WebhookService::new(&ctx)
            .create_webhook(writer.id, request(channel.id))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PERMISSIONS");
        assert!(ctx.webhook_repo().list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_only_owner_or_admin_may_edit() {
        let ctx = test_support::context();
        let owner = test_support::user(&ctx, roles::USER).await;
        let other = test_support::user(&ctx, roles::USER).await;
        let admin = test_support::user(&ctx, roles::ADMIN).await;
        let channel = channel(&ctx, owner.id).await;
        let service = WebhookService::new(&ctx);
        let webhook = service.create_webhook(owner.id, request(channel.id)).await.unwrap();

        let rename = |name: &str| UpdateWebhookRequest {
            name: Some(name.to_string()),
            ..Default::default()
        };

        let err = service
            .update_webhook(other.id, webhook.id, rename("hijack"))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_CREATOR");

        service.update_webhook(owner.id, webhook.id, rename("ci")).await.unwrap();
        service.update_webhook(admin.id, webhook.id, rename("cd")).await.unwrap();
        assert_eq!(service.get_webhook(other.id, webhook.id).await.unwrap().name, "cd");

        let err = service.delete_webhook(other.id, webhook.id).await.unwrap_err();
        assert_eq!(err.status_code(), 403);
        service.delete_webhook(owner.id, webhook.id).await.unwrap();

        let err = service.get_webhook(owner.id, webhook.id).await.unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_WEBHOOK");
    }
}
