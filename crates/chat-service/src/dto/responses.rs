//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` and use camelCase field names.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use chat_core::entities::{BotState, UserState};
use chat_core::events::BotEventType;

// ============================================================================
// User Responses
// ============================================================================

/// User response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub role: String,
    pub bot: bool,
    pub state: UserState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role and permission names held by a user
#[derive(Debug, Clone, Serialize)]
pub struct PermissionsResponse {
    pub role: String,
    pub permissions: Vec<String>,
}

// ============================================================================
// Channel / Message Responses
// ============================================================================

/// Channel response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelResponse {
    pub id: Uuid,
    pub name: String,
    pub topic: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Pin response, with the pinned message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinResponse {
    pub id: Uuid,
    pub channel_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub message: MessageResponse,
}

// ============================================================================
// Webhook Responses
// ============================================================================

/// Webhook response; the secret is never included
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub id: Uuid,
    pub bot_user_id: Uuid,
    pub name: String,
    pub description: String,
    pub channel_id: Uuid,
    pub owner_id: Uuid,
    /// Whether incoming requests must be signed
    pub secure: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Stamp / User Group / Bot Responses
// ============================================================================

/// Stamp response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StampResponse {
    pub id: Uuid,
    pub name: String,
    pub creator_id: Uuid,
    pub file_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stamp pressed on a message by one user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageStampResponse {
    pub user_id: Uuid,
    pub stamp_id: Uuid,
    pub count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User group response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: String,
    pub admins: Vec<Uuid>,
    pub members: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Bot response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotResponse {
    pub id: Uuid,
    pub bot_user_id: Uuid,
    pub name: String,
    pub description: String,
    pub creator_id: Uuid,
    pub subscribe_events: Vec<BotEventType>,
    pub state: BotState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Status of each background component
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    pub store: String,
    pub bot_dispatcher: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool, dispatcher_running: bool) -> Self {
        let all_healthy = store_healthy && dispatcher_running;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
                bot_dispatcher: if dispatcher_running { "running" } else { "stopped" }
                    .to_string(),
            },
        }
    }
}
