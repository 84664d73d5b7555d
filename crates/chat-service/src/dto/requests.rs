//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Field names are camelCase on the wire.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use chat_core::events::BotEventType;

// ============================================================================
// Channel / Message Requests
// ============================================================================

/// Create channel request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateChannelRequest {
    #[validate(length(min = 1, max = 20, message = "Channel name must be 1-20 characters"))]
    pub name: String,

    #[validate(length(max = 256, message = "Topic must be at most 256 characters"))]
    pub topic: Option<String>,
}

/// Post message request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

/// Message listing query
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MessageListQuery {
    #[validate(range(min = 1, max = 200, message = "Limit must be 1-200"))]
    pub limit: Option<usize>,

    pub offset: Option<usize>,
}

// ============================================================================
// Star / Pin Requests
// ============================================================================

/// Star a channel
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddStarRequest {
    pub channel_id: Uuid,
}

/// Pin a message
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePinRequest {
    pub message_id: Uuid,
}

// ============================================================================
// Webhook Requests
// ============================================================================

/// Create webhook request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    #[validate(length(min = 1, max = 32, message = "Webhook name must be 1-32 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,

    pub channel_id: Uuid,

    #[serde(default)]
    pub secret: String,
}

/// Update webhook request; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookRequest {
    #[validate(length(min = 1, max = 32, message = "Webhook name must be 1-32 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub channel_id: Option<Uuid>,

    pub secret: Option<String>,

    /// New creator
    pub owner_id: Option<Uuid>,
}

/// Webhook listing query
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct WebhookListQuery {
    /// List every webhook instead of the caller's own
    #[serde(default)]
    pub all: bool,
}

// ============================================================================
// Stamp Requests
// ============================================================================

/// Create stamp request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStampRequest {
    #[validate(length(min = 1, max = 32, message = "Stamp name must be 1-32 characters"))]
    pub name: String,

    pub file_id: Option<Uuid>,
}

/// Update stamp request; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStampRequest {
    #[validate(length(min = 1, max = 32, message = "Stamp name must be 1-32 characters"))]
    pub name: Option<String>,

    pub file_id: Option<Uuid>,
}

// ============================================================================
// User Group Requests
// ============================================================================

/// Create user group request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserGroupRequest {
    #[validate(length(min = 1, max = 30, message = "Group name must be 1-30 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "type")]
    #[validate(length(max = 30, message = "Group type must be at most 30 characters"))]
    pub group_type: String,
}

// ============================================================================
// Bot Requests
// ============================================================================

/// Create bot request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBotRequest {
    #[validate(length(min = 1, max = 32, message = "Bot name must be 1-32 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 32, message = "Display name must be 1-32 characters"))]
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub subscribe_events: Vec<BotEventType>,
}
