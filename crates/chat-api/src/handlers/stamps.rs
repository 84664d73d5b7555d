//! Stamp handlers

use axum::{extract::State, Json};
use chat_service::{CreateStampRequest, StampResponse, StampService, UpdateStampRequest};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /stamps
pub async fn list_stamps(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<StampResponse>>> {
    let service = StampService::new(state.service_context());
    let stamps = service.list_stamps(auth.user_id).await?;
    Ok(Json(stamps))
}

/// POST /stamps
pub async fn create_stamp(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateStampRequest>,
) -> ApiResult<Created<Json<StampResponse>>> {
    let service = StampService::new(state.service_context());
    let response = service.create_stamp(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /stamps/{stamp_id}
pub async fn get_stamp(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(stamp_id): IdPath,
) -> ApiResult<Json<StampResponse>> {
    let service = StampService::new(state.service_context());
    let response = service.get_stamp(auth.user_id, stamp_id).await?;
    Ok(Json(response))
}

/// PATCH /stamps/{stamp_id}
pub async fn update_stamp(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(stamp_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateStampRequest>,
) -> ApiResult<NoContent> {
    let service = StampService::new(state.service_context());
    service.update_stamp(auth.user_id, stamp_id, request).await?;
    Ok(NoContent)
}

/// DELETE /stamps/{stamp_id}
pub async fn delete_stamp(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(stamp_id): IdPath,
) -> ApiResult<NoContent> {
    let service = StampService::new(state.service_context());
    service.delete_stamp(auth.user_id, stamp_id).await?;
    Ok(NoContent)
}
