//! Webhook handlers

use axum::{extract::State, Json};
use chat_service::{
    CreateWebhookRequest, UpdateWebhookRequest, WebhookListQuery, WebhookResponse, WebhookService,
};

use crate::extractors::{AuthUser, IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List own webhooks, or all with `?all=true`
///
/// GET /webhooks
pub async fn list_webhooks(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(query): ValidatedQuery<WebhookListQuery>,
) -> ApiResult<Json<Vec<WebhookResponse>>> {
    let service = WebhookService::new(state.service_context());
    let webhooks = service.list_webhooks(auth.user_id, query.all).await?;
    Ok(Json(webhooks))
}

/// Create webhook
///
/// POST /webhooks
pub async fn create_webhook(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateWebhookRequest>,
) -> ApiResult<Created<Json<WebhookResponse>>> {
    let service = WebhookService::new(state.service_context());
    let response = service.create_webhook(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get webhook by ID
///
/// GET /webhooks/{webhook_id}
pub async fn get_webhook(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(webhook_id): IdPath,
) -> ApiResult<Json<WebhookResponse>> {
    let service = WebhookService::new(state.service_context());
    let response = service.get_webhook(auth.user_id, webhook_id).await?;
    Ok(Json(response))
}

/// Update webhook
///
/// PATCH /webhooks/{webhook_id}
pub async fn update_webhook(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(webhook_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateWebhookRequest>,
) -> ApiResult<NoContent> {
    let service = WebhookService::new(state.service_context());
    service
        .update_webhook(auth.user_id, webhook_id, request)
        .await?;
    Ok(NoContent)
}

/// Delete webhook
///
/// DELETE /webhooks/{webhook_id}
pub async fn delete_webhook(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(webhook_id): IdPath,
) -> ApiResult<NoContent> {
    let service = WebhookService::new(state.service_context());
    service.delete_webhook(auth.user_id, webhook_id).await?;
    Ok(NoContent)
}
