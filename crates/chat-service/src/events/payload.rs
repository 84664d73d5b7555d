//! Bot event payloads
//!
//! Every payload is camelCase JSON carrying `eventTime` plus the event
//! object.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use chat_core::entities::{Channel, Stamp, User, UserGroup};

/// User as seen by bots
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub bot: bool,
}

impl From<&User> for UserPayload {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            display_name: user.display_name.clone(),
            bot: user.bot,
        }
    }
}

/// Channel as seen by bots
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPayload {
    pub id: Uuid,
    pub name: String,
    pub topic: String,
    pub creator_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&Channel> for ChannelPayload {
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

/// User group as seen by bots
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupPayload {
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

impl From<&UserGroup> for UserGroupPayload {
    fn from(group: &UserGroup) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
            group_type: group.group_type.clone(),
            admins: group.admin_ids.iter().copied().collect(),
            members: group.member_ids.iter().copied().collect(),
            created_at: group.created_at,
            updated_at: group.updated_at,
        }
    }
}

/// `USER_CREATED`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedPayload {
    pub event_time: DateTime<Utc>,
    pub user: UserPayload,
}

impl UserCreatedPayload {
    pub fn new(event_time: DateTime<Utc>, user: &User) -> Self {
        Self {
            event_time,
            user: user.into(),
        }
    }
}

/// `CHANNEL_CREATED`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelCreatedPayload {
    pub event_time: DateTime<Utc>,
    pub channel: ChannelPayload,
}

impl ChannelCreatedPayload {
    pub fn new(event_time: DateTime<Utc>, channel: &Channel) -> Self {
        Self {
            event_time,
            channel: channel.into(),
        }
    }
}

/// `STAMP_CREATED`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StampCreatedPayload {
    pub event_time: DateTime<Utc>,
    pub id: Uuid,
    pub name: String,
    pub file_id: Option<Uuid>,
    pub creator_id: Uuid,
}

impl StampCreatedPayload {
    pub fn new(event_time: DateTime<Utc>, stamp: &Stamp) -> Self {
        Self {
            event_time,
            id: stamp.id,
            name: stamp.name.clone(),
            file_id: stamp.file_id,
            creator_id: stamp.creator_id,
        }
    }
}

/// `USER_GROUP_CREATED`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupCreatedPayload {
    pub event_time: DateTime<Utc>,
    pub group: UserGroupPayload,
}

impl UserGroupCreatedPayload {
    pub fn new(event_time: DateTime<Utc>, group: &UserGroup) -> Self {
        Self {
            event_time,
            group: group.into(),
        }
    }
}

/// `USER_GROUP_DELETED`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupDeletedPayload {
    pub event_time: DateTime<Utc>,
    pub group_id: Uuid,
}

impl UserGroupDeletedPayload {
    pub fn new(event_time: DateTime<Utc>, group: &UserGroup) -> Self {
        Self {
            event_time,
            group_id: group.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn group() -> UserGroup {
        UserGroup::new(
            Uuid::new_v4(),
            "team".to_string(),
            "the team".to_string(),
            "grade".to_string(),
            Uuid::new_v4(),
        )
    }

    #[test]
    fn test_user_group_deleted_payload() {
        let group = group();
        let now = Utc::now();
        let value = serde_json::to_value(UserGroupDeletedPayload::new(now, &group)).unwrap();

        assert_eq!(
            value,
            json!({
                "eventTime": serde_json::to_value(now).unwrap(),
                "groupId": group.id.to_string(),
            })
        );
    }

    #[test]
    fn test_user_group_created_payload_is_camel_case() {
        let group = group();
        let value =
            serde_json::to_value(UserGroupCreatedPayload::new(Utc::now(), &group)).unwrap();

        assert!(value.get("eventTime").is_some());
        assert_eq!(value["group"]["type"], "grade");
        assert_eq!(value["group"]["admins"].as_array().map(Vec::len), Some(1));
        assert!(value["group"].get("createdAt").is_some());
    }

    #[test]
    fn test_stamp_created_payload() {
        let stamp = Stamp::new(Uuid::new_v4(), "wave".to_string(), Uuid::new_v4(), None);
        let value = serde_json::to_value(StampCreatedPayload::new(Utc::now(), &stamp)).unwrap();

        assert_eq!(value["name"], "wave");
        assert!(value["fileId"].is_null());
        assert_eq!(value["creatorId"], stamp.creator_id.to_string());
    }
}
