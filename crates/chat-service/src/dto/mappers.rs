//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chat_core::entities::{Bot, Channel, Message, MessageStamp, Stamp, User, UserGroup, Webhook};

use super::responses::{
    BotResponse, ChannelResponse, MessageResponse, MessageStampResponse, StampResponse,
    UserGroupResponse, UserResponse, WebhookResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            display_name: user.display_name.clone(),
            role: user.role.clone(),
            bot: user.bot,
            state: user.state,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Channel / Message Mappers
// ============================================================================

impl From<&Channel> for ChannelResponse {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id,
            name: channel.name.clone(),
            topic: channel.topic.clone(),
            creator_id: channel.creator_id,
            created_at: channel.created_at,
        }
    }
}

impl From<Channel> for ChannelResponse {
    fn from(channel: Channel) -> Self {
        Self::from(&channel)
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            channel_id: message.channel_id,
            user_id: message.user_id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

// ============================================================================
// Webhook Mappers
// ============================================================================

impl From<&Webhook> for WebhookResponse {
    fn from(webhook: &Webhook) -> Self {
        Self {
            id: webhook.id,
            bot_user_id: webhook.bot_user_id,
            name: webhook.name.clone(),
            description: webhook.description.clone(),
            channel_id: webhook.channel_id,
            owner_id: webhook.creator_id,
            secure: webhook.requires_signature(),
            created_at: webhook.created_at,
            updated_at: webhook.updated_at,
        }
    }
}

impl From<Webhook> for WebhookResponse {
    fn from(webhook: Webhook) -> Self {
        Self::from(&webhook)
    }
}

// ============================================================================
// Stamp / User Group / Bot Mappers
// ============================================================================

impl From<Stamp> for StampResponse {
    fn from(stamp: Stamp) -> Self {
        Self {
            id: stamp.id,
            name: stamp.name,
            creator_id: stamp.creator_id,
            file_id: stamp.file_id,
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
        }
    }
}

impl From<MessageStamp> for MessageStampResponse {
    fn from(stamp: MessageStamp) -> Self {
        Self {
            user_id: stamp.user_id,
            stamp_id: stamp.stamp_id,
            count: stamp.count,
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
        }
    }
}

impl From<UserGroup> for UserGroupResponse {
    fn from(group: UserGroup) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            group_type: group.group_type,
            admins: group.admin_ids.into_iter().collect(),
            members: group.member_ids.into_iter().collect(),
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

impl From<Bot> for BotResponse {
    fn from(bot: Bot) -> Self {
        Self {
            id: bot.id,
            bot_user_id: bot.bot_user_id,
            name: bot.name,
            description: bot.description,
            creator_id: bot.creator_id,
            subscribe_events: bot.subscribe_events.into_iter().collect(),
            state: bot.state,
            created_at: bot.created_at,
            updated_at: bot.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_webhook_mapping_hides_secret() {
        let webhook = Webhook::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "deploy".to_string(),
            String::new(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "s3cret".to_string(),
        );
        let response = WebhookResponse::from(&webhook);
        assert!(response.secure);
        assert_eq!(response.owner_id, webhook.creator_id);

        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("s3cret"));
    }

    #[test]
    fn test_user_mapping() {
        let user = User::new(Uuid::new_v4(), "alice".to_string(), "write");
        let response = UserResponse::from(&user);
        assert_eq!(response.role, "write");
        assert_eq!(response.display_name, "alice");
    }
}
