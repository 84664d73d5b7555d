//! Domain events - events emitted when domain state changes
//!
//! Services publish these on the in-process event bus. The bot dispatcher
//! turns them into bot event payloads.

use chrono::{DateTime, Utc};

use crate::entities::{Channel, Stamp, User, UserGroup};

use super::BotEventType;

/// All published domain events
#[derive(Debug, Clone)]
pub enum DomainEvent {
    UserCreated(UserCreatedEvent),
    ChannelCreated(ChannelCreatedEvent),
    StampCreated(StampCreatedEvent),
    UserGroupCreated(UserGroupCreatedEvent),
    UserGroupDeleted(UserGroupDeletedEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        self.bot_event_type().as_str()
    }

    /// Bot event kind this event is delivered as
    pub fn bot_event_type(&self) -> BotEventType {
        match self {
            Self::UserCreated(_) => BotEventType::UserCreated,
            Self::ChannelCreated(_) => BotEventType::ChannelCreated,
            Self::StampCreated(_) => BotEventType::StampCreated,
            Self::UserGroupCreated(_) => BotEventType::UserGroupCreated,
            Self::UserGroupDeleted(_) => BotEventType::UserGroupDeleted,
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::UserCreated(e) => e.timestamp,
            Self::ChannelCreated(e) => e.timestamp,
            Self::StampCreated(e) => e.timestamp,
            Self::UserGroupCreated(e) => e.timestamp,
            Self::UserGroupDeleted(e) => e.timestamp,
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

#[derive(Debug, Clone)]
pub struct UserCreatedEvent {
    pub user: User,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ChannelCreatedEvent {
    pub channel: Channel,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StampCreatedEvent {
    pub stamp: Stamp,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserGroupCreatedEvent {
    pub group: UserGroup,
    pub timestamp: DateTime<Utc>,
}

/// Carries the group as it was just before deletion
#[derive(Debug, Clone)]
pub struct UserGroupDeletedEvent {
    pub group: UserGroup,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Event Creation Helpers
// ============================================================================

impl UserCreatedEvent {
    pub fn new(user: User) -> Self {
        Self {
            user,
            timestamp: Utc::now(),
        }
    }
}

impl ChannelCreatedEvent {
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            timestamp: Utc::now(),
        }
    }
}

impl StampCreatedEvent {
    pub fn new(stamp: Stamp) -> Self {
        Self {
            stamp,
            timestamp: Utc::now(),
        }
    }
}

impl UserGroupCreatedEvent {
    pub fn new(group: UserGroup) -> Self {
        Self {
            group,
            timestamp: Utc::now(),
        }
    }
}

impl UserGroupDeletedEvent {
    pub fn new(group: UserGroup) -> Self {
        Self {
            group,
            timestamp: Utc::now(),
        }
    }
}

impl From<UserCreatedEvent> for DomainEvent {
    fn from(e: UserCreatedEvent) -> Self {
        Self::UserCreated(e)
    }
}

impl From<ChannelCreatedEvent> for DomainEvent {
    fn from(e: ChannelCreatedEvent) -> Self {
        Self::ChannelCreated(e)
    }
}

impl From<StampCreatedEvent> for DomainEvent {
    fn from(e: StampCreatedEvent) -> Self {
        Self::StampCreated(e)
    }
}

impl From<UserGroupCreatedEvent> for DomainEvent {
    fn from(e: UserGroupCreatedEvent) -> Self {
        Self::UserGroupCreated(e)
    }
}

impl From<UserGroupDeletedEvent> for DomainEvent {
    fn from(e: UserGroupDeletedEvent) -> Self {
        Self::UserGroupDeleted(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_event_type() {
        let group = UserGroup::new(
            Uuid::new_v4(),
            "g".to_string(),
            String::new(),
            String::new(),
            Uuid::new_v4(),
        );
        let event: DomainEvent = UserGroupDeletedEvent::new(group).into();
        assert_eq!(event.event_type(), "USER_GROUP_DELETED");
        assert_eq!(event.bot_event_type(), BotEventType::UserGroupDeleted);
    }
}
