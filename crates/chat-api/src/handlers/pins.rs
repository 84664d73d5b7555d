//! Pin handlers

use axum::{extract::State, Json};
use chat_service::{CreatePinRequest, PinResponse, PinService};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Pins of a channel
///
/// GET /channels/{channel_id}/pins
pub async fn list_pins(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<Json<Vec<PinResponse>>> {
    let service = PinService::new(state.service_context());
    let pins = service.list_pins(auth.user_id, channel_id).await?;
    Ok(Json(pins))
}

/// Pin a message
///
/// POST /channels/{channel_id}/pins
pub async fn create_pin(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreatePinRequest>,
) -> ApiResult<Created<Json<PinResponse>>> {
    let service = PinService::new(state.service_context());
    let response = service
        .create_pin(auth.user_id, channel_id, request.message_id)
        .await?;
    Ok(Created(Json(response)))
}

/// Get pin by ID
///
/// GET /pins/{pin_id}
pub async fn get_pin(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(pin_id): IdPath,
) -> ApiResult<Json<PinResponse>> {
    let service = PinService::new(state.service_context());
    let response = service.get_pin(auth.user_id, pin_id).await?;
    Ok(Json(response))
}

/// Unpin
///
/// DELETE /pins/{pin_id}
pub async fn delete_pin(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(pin_id): IdPath,
) -> ApiResult<NoContent> {
    let service = PinService::new(state.service_context());
    service.delete_pin(auth.user_id, pin_id).await?;
    Ok(NoContent)
}
