//! User handlers
//!
//! Endpoints for user profiles and permission introspection.

use axum::{extract::State, Json};
use chat_service::{PermissionsResponse, UserResponse, UserService};

use crate::extractors::{AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_me(auth.user_id).await?;
    Ok(Json(response))
}

/// Role and permissions of the current user
///
/// GET /users/@me/permissions
pub async fn get_my_permissions(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PermissionsResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.my_permissions(auth.user_id).await?;
    Ok(Json(response))
}

/// Get user by ID
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(auth.user_id, user_id).await?;
    Ok(Json(response))
}

/// Role and permissions of another user
///
/// GET /users/{user_id}/permissions
pub async fn get_user_permissions(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<PermissionsResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.user_permissions(auth.user_id, user_id).await?;
    Ok(Json(response))
}
