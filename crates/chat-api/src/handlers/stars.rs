//! Star handlers

use axum::{extract::State, Json};
use chat_service::{AddStarRequest, StarService};
use uuid::Uuid;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Channels starred by the current user
///
/// GET /users/@me/stars
pub async fn list_stars(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Uuid>>> {
    let service = StarService::new(state.service_context());
    let stars = service.list_stars(auth.user_id).await?;
    Ok(Json(stars))
}

/// Star a channel
///
/// POST /users/@me/stars
pub async fn add_star(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AddStarRequest>,
) -> ApiResult<NoContent> {
    let service = StarService::new(state.service_context());
    service.add_star(auth.user_id, request.channel_id).await?;
    Ok(NoContent)
}

/// Unstar a channel
///
/// DELETE /users/@me/stars/{channel_id}
pub async fn remove_star(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(channel_id): IdPath,
) -> ApiResult<NoContent> {
    let service = StarService::new(state.service_context());
    service.remove_star(auth.user_id, channel_id).await?;
    Ok(NoContent)
}
