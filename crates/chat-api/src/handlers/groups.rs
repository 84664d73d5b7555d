//! User group handlers

use axum::{extract::State, Json};
use chat_service::{CreateUserGroupRequest, UserGroupResponse, UserGroupService};

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List user groups
///
/// GET /groups
pub async fn list_groups(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserGroupResponse>>> {
    let service = UserGroupService::new(state.service_context());
    let groups = service.list_groups(auth.user_id).await?;
    Ok(Json(groups))
}

/// Create user group; the caller becomes its admin
///
/// POST /groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserGroupRequest>,
) -> ApiResult<Created<Json<UserGroupResponse>>> {
    let service = UserGroupService::new(state.service_context());
    let response = service.create_group(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get user group by ID
///
/// GET /groups/{group_id}
pub async fn get_group(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(group_id): IdPath,
) -> ApiResult<Json<UserGroupResponse>> {
    let service = UserGroupService::new(state.service_context());
    let response = service.get_group(auth.user_id, group_id).await?;
    Ok(Json(response))
}

/// Delete user group
///
/// DELETE /groups/{group_id}
pub async fn delete_group(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(group_id): IdPath,
) -> ApiResult<NoContent> {
    let service = UserGroupService::new(state.service_context());
    service.delete_group(auth.user_id, group_id).await?;
    Ok(NoContent)
}
