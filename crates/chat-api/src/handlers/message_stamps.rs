//! Message stamp handlers

use axum::{extract::State, Json};
use chat_service::{MessageStampResponse, MessageStampService};

use crate::extractors::{AuthUser, IdPairPath, IdPath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Stamps pressed on a message
///
/// GET /messages/{message_id}/stamps
pub async fn list_message_stamps(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<Vec<MessageStampResponse>>> {
    let service = MessageStampService::new(state.service_context());
    let stamps = service.list_message_stamps(auth.user_id, message_id).await?;
    Ok(Json(stamps))
}

/// Press a stamp on a message
///
/// POST /messages/{message_id}/stamps/{stamp_id}
pub async fn add_message_stamp(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPairPath(message_id, stamp_id): IdPairPath,
) -> ApiResult<NoContent> {
    let service = MessageStampService::new(state.service_context());
    service
        .add_message_stamp(auth.user_id, message_id, stamp_id)
        .await?;
    Ok(NoContent)
}

/// Take back a stamp
///
/// DELETE /messages/{message_id}/stamps/{stamp_id}
pub async fn remove_message_stamp(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPairPath(message_id, stamp_id): IdPairPath,
) -> ApiResult<NoContent> {
    let service = MessageStampService::new(state.service_context());
    service
        .remove_message_stamp(auth.user_id, message_id, stamp_id)
        .await?;
    Ok(NoContent)
}
