//! Domain entities - core business objects

mod bot;
mod channel;
mod message;
mod message_stamp;
mod pin;
mod stamp;
mod user;
mod user_group;
mod webhook;

pub use bot::{Bot, BotState};
pub use channel::{validate_channel_name, Channel, CHANNEL_NAME_MAX_LEN};
pub use message::{validate_content, Message, MESSAGE_MAX_LEN};
pub use message_stamp::{MessageStamp, MESSAGE_STAMP_MAX_COUNT};
pub use pin::Pin;
pub use stamp::{validate_stamp_name, Stamp, STAMP_NAME_MAX_LEN};
pub use user::{validate_user_name, User, UserState, USER_NAME_MAX_LEN};
pub use user_group::{validate_user_group_name, UserGroup, USER_GROUP_NAME_MAX_LEN};
pub use webhook::{
    generate_webhook_bot_name, validate_webhook_name, UpdateWebhookArgs, Webhook,
    WEBHOOK_BOT_NAME_PREFIX, WEBHOOK_NAME_MAX_LEN,
};

use crate::error::DomainError;

/// Length in characters must be 1..=max; `slug` restricts to `[A-Za-z0-9_-]`
fn check_name(field: &str, value: &str, max: usize, slug: bool) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(DomainError::InvalidName(format!(
            "{field} must be 1-{max} characters"
        )));
    }
    if slug
        && !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(DomainError::InvalidName(format!(
            "{field} may only contain A-Z, a-z, 0-9, '_' and '-'"
        )));
    }
    Ok(())
}
