//! Webhook entity - an inbound integration backed by its own bot user

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

use super::check_name;

/// Maximum length of a webhook name
pub const WEBHOOK_NAME_MAX_LEN: usize = 32;

/// Prefix of the user name given to a webhook's bot user
pub const WEBHOOK_BOT_NAME_PREFIX: &str = "Webhook#";

/// Webhook entity
///
/// `name` doubles as the bot user's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    pub id: Uuid,
    pub bot_user_id: Uuid,
    pub name: String,
    pub description: String,
    pub channel_id: Uuid,
    pub creator_id: Uuid,
    pub secret: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Webhook {
    /// Create a new Webhook
    pub fn new(
        id: Uuid,
        bot_user_id: Uuid,
        name: String,
        description: String,
        channel_id: Uuid,
        creator_id: Uuid,
        secret: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            bot_user_id,
            name,
            description,
            channel_id,
            creator_id,
            secret,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user_id` created this webhook
    #[inline]
    pub fn is_created_by(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }

    /// Whether incoming requests must be signed
    #[inline]
    pub fn requires_signature(&self) -> bool {
        !self.secret.is_empty()
    }
}

/// Fields of a webhook update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateWebhookArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub channel_id: Option<Uuid>,
    pub secret: Option<String>,
    pub creator_id: Option<Uuid>,
}

impl UpdateWebhookArgs {
    /// Whether the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.channel_id.is_none()
            && self.secret.is_none()
            && self.creator_id.is_none()
    }
}

/// Validate a webhook name: 1-32 characters
pub fn validate_webhook_name(name: &str) -> Result<(), DomainError> {
    check_name("webhook name", name, WEBHOOK_NAME_MAX_LEN, false)
}

/// Generate a unique user name for a webhook's bot user
pub fn generate_webhook_bot_name() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const SUFFIX_LEN: usize = 20;

    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("{WEBHOOK_BOT_NAME_PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webhook(creator_id: Uuid, secret: &str) -> Webhook {
        Webhook::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "deploy".to_string(),
            "posts deploy results".to_string(),
            Uuid::new_v4(),
            creator_id,
            secret.to_string(),
        )
    }

    #[test]
    fn test_is_created_by() {
        let creator = Uuid::new_v4();
        let wh = webhook(creator, "");
        assert!(wh.is_created_by(creator));
        assert!(!wh.is_created_by(Uuid::new_v4()));
    }

    #[test]
    fn test_requires_signature() {
        assert!(!webhook(Uuid::new_v4(), "").requires_signature());
        assert!(webhook(Uuid::new_v4(), "s3cret").requires_signature());
    }

    #[test]
    fn test_empty_update() {
        assert!(UpdateWebhookArgs::default().is_empty());
        let args = UpdateWebhookArgs {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(!args.is_empty());
    }

    #[test]
    fn test_validate_webhook_name() {
        assert!(validate_webhook_name("test").is_ok());
        assert!(validate_webhook_name("new name").is_ok());
        assert!(validate_webhook_name("").is_err());
        assert!(validate_webhook_name(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_generate_webhook_bot_name() {
        let a = generate_webhook_bot_name();
        let b = generate_webhook_bot_name();

        assert!(a.starts_with(WEBHOOK_BOT_NAME_PREFIX));
        assert_eq!(a.len(), WEBHOOK_BOT_NAME_PREFIX.len() + 20);
        assert_ne!(a, b);
    }
}
