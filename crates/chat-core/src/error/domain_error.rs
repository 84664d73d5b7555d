//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Channel not found: {0}")]
    ChannelNotFound(Uuid),

    #[error("Message not found: {0}")]
    MessageNotFound(Uuid),

    #[error("Webhook not found: {0}")]
    WebhookNotFound(Uuid),

    #[error("Pin not found: {0}")]
    PinNotFound(Uuid),

    #[error("Stamp not found: {0}")]
    StampNotFound(Uuid),

    #[error("User group not found: {0}")]
    UserGroupNotFound(Uuid),

    #[error("Bot not found: {0}")]
    BotNotFound(Uuid),

    #[error("not found")]
    NotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("nil id")]
    NilId,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid creator: {0}")]
    InvalidCreator(Uuid),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("Not the creator of this resource")]
    NotCreator,

    #[error("Not an admin of this user group")]
    NotGroupAdmin,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Message is already pinned")]
    AlreadyPinned,

    #[error("Stamp name already in use: {0}")]
    StampNameExists(String),

    #[error("User group name already in use: {0}")]
    UserGroupNameExists(String),

    #[error("User name already in use: {0}")]
    UserNameExists(String),

    #[error("Channel name already in use: {0}")]
    ChannelNameExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ChannelNotFound(_) => "UNKNOWN_CHANNEL",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::WebhookNotFound(_) => "UNKNOWN_WEBHOOK",
            Self::PinNotFound(_) => "UNKNOWN_PIN",
            Self::StampNotFound(_) => "UNKNOWN_STAMP",
            Self::UserGroupNotFound(_) => "UNKNOWN_USER_GROUP",
            Self::BotNotFound(_) => "UNKNOWN_BOT",
            Self::NotFound => "NOT_FOUND",

            // Validation
            Self::NilId => "NIL_ID",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidName(_) => "INVALID_NAME",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidCreator(_) => "INVALID_CREATOR",

            // Authorization
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::NotCreator => "NOT_CREATOR",
            Self::NotGroupAdmin => "NOT_GROUP_ADMIN",

            // Conflict
            Self::AlreadyPinned => "ALREADY_PINNED",
            Self::StampNameExists(_) => "STAMP_NAME_EXISTS",
            Self::UserGroupNameExists(_) => "USER_GROUP_NAME_EXISTS",
            Self::UserNameExists(_) => "USER_NAME_EXISTS",
            Self::ChannelNameExists(_) => "CHANNEL_NAME_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ChannelNotFound(_)
                | Self::MessageNotFound(_)
                | Self::WebhookNotFound(_)
                | Self::PinNotFound(_)
                | Self::StampNotFound(_)
                | Self::UserGroupNotFound(_)
                | Self::BotNotFound(_)
                | Self::NotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NilId
                | Self::ValidationError(_)
                | Self::InvalidName(_)
                | Self::ContentTooLong { .. }
                | Self::InvalidCreator(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MissingPermission(_) | Self::NotCreator | Self::NotGroupAdmin
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyPinned
                | Self::StampNameExists(_)
                | Self::UserGroupNameExists(_)
                | Self::UserNameExists(_)
                | Self::ChannelNameExists(_)
        )
    }
}
