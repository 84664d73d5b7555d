//! Bot event kinds

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Event kinds a bot can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BotEventType {
    UserCreated,
    ChannelCreated,
    StampCreated,
    UserGroupCreated,
    UserGroupDeleted,
}

impl BotEventType {
    pub const ALL: [BotEventType; 5] = [
        Self::UserCreated,
        Self::ChannelCreated,
        Self::StampCreated,
        Self::UserGroupCreated,
        Self::UserGroupDeleted,
    ];

    /// Wire name of the event kind
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserCreated => "USER_CREATED",
            Self::ChannelCreated => "CHANNEL_CREATED",
            Self::StampCreated => "STAMP_CREATED",
            Self::UserGroupCreated => "USER_GROUP_CREATED",
            Self::UserGroupDeleted => "USER_GROUP_DELETED",
        }
    }
}

impl fmt::Display for BotEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BotEventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| format!("unknown bot event: {s}"))
    }
}
