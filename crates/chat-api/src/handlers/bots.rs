//! Bot handlers

use axum::{extract::State, Json};
use chat_service::{BotResponse, BotService, CreateBotRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List bots
///
/// GET /bots
pub async fn list_bots(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BotResponse>>> {
    let service = BotService::new(state.service_context());
    let bots = service.list_bots(auth.user_id).await?;
    Ok(Json(bots))
}

/// Create bot
///
/// POST /bots
pub async fn create_bot(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBotRequest>,
) -> ApiResult<Created<Json<BotResponse>>> {
    let service = BotService::new(state.service_context());
    let response = service.create_bot(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}
