//! MessageStamp entity - a stamp a user put on a message

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Most times one user may repeat a stamp on one message
pub const MESSAGE_STAMP_MAX_COUNT: u32 = 100;

/// One user's use of one stamp on one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStamp {
    pub message_id: Uuid,
    pub stamp_id: Uuid,
    pub user_id: Uuid,
    /// How many times the user pressed the stamp
    pub count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MessageStamp {
    pub fn new(message_id: Uuid, stamp_id: Uuid, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            message_id,
            stamp_id,
            user_id,
            count: 1,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this row is `user_id`'s use of `stamp_id`
    pub fn is_use_of(&self, stamp_id: Uuid, user_id: Uuid) -> bool {
        self.stamp_id == stamp_id && self.user_id == user_id
    }

    /// Press the stamp once more, saturating at [`MESSAGE_STAMP_MAX_COUNT`]
    pub fn press(&mut self) {
        self.count = (self.count + 1).min(MESSAGE_STAMP_MAX_COUNT);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_saturates() {
        let mut stamp = MessageStamp::new(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(stamp.count, 1);
        for _ in 0..200 {
            stamp.press();
        }
        assert_eq!(stamp.count, MESSAGE_STAMP_MAX_COUNT);
    }
}
