//! Message handlers

use axum::{extract::State, Json};
use chat_service::{MessageListQuery, MessageResponse, MessageService, PostMessageRequest};

use crate::extractors::{AuthUser, IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get messages in channel, newest first
///
/// GET /channels/{channel_id}/messages?limit=&offset=
pub async fn get_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ValidatedQuery(query): ValidatedQuery<MessageListQuery>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service
        .list_messages(auth.user_id, channel_id, query)
        .await?;
    Ok(Json(messages))
}

/// Post message
///
/// POST /channels/{channel_id}/messages
pub async fn post_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ValidatedJson(request): ValidatedJson<PostMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service
        .post_message(auth.user_id, channel_id, request)
        .await?;
    Ok(Created(Json(response)))
}

/// Get message by ID
///
/// GET /messages/{message_id}
pub async fn get_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.get_message(auth.user_id, message_id).await?;
    Ok(Json(response))
}
