//! In-memory store shared by every repository
//!
//! Each table sits behind its own `parking_lot::RwLock`; stars and message
//! stamps live in `DashMap`s. Operations that touch several tables acquire their locks in
//! the order the fields are declared on [`Database`] (users, channels,
//! messages, then the rest) and never hold a lock across an `.await`.

mod table;

use std::collections::BTreeSet;
use std::sync::Arc;

use chat_core::entities::{
    Bot, Channel, Message, MessageStamp, Pin, Stamp, User, UserGroup, Webhook,
};
use dashmap::DashMap;
use parking_lot::RwLock;
use uuid::Uuid;

pub use table::Table;

/// Shared handle to the store
pub type DbPool = Arc<Database>;

/// The in-memory store
#[derive(Debug, Default)]
pub struct Database {
    pub(crate) users: RwLock<Table<User>>,
    pub(crate) channels: RwLock<Table<Channel>>,
    pub(crate) messages: RwLock<Table<Message>>,
    pub(crate) webhooks: RwLock<Table<Webhook>>,
    pub(crate) pins: RwLock<Table<Pin>>,
    pub(crate) stamps: RwLock<Table<Stamp>>,
    pub(crate) user_groups: RwLock<Table<UserGroup>>,
    pub(crate) bots: RwLock<Table<Bot>>,
    /// user id -> starred channel ids
    pub(crate) stars: DashMap<Uuid, BTreeSet<Uuid>>,
    /// message id -> stamps on it, in the order they were first added
    pub(crate) message_stamps: DashMap<Uuid, Vec<MessageStamp>>,
}

impl Database {
    /// Row counts per table, for readiness reporting
    pub fn stats(&self) -> DatabaseStats {
        DatabaseStats {
            users: self.users.read().len(),
            channels: self.channels.read().len(),
            messages: self.messages.read().len(),
            webhooks: self.webhooks.read().len(),
            bots: self.bots.read().len(),
        }
    }
}

/// Snapshot of table sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseStats {
    pub users: usize,
    pub channels: usize,
    pub messages: usize,
    pub webhooks: usize,
    pub bots: usize,
}

/// Create an empty store
pub fn create_pool() -> DbPool {
    Arc::new(Database::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_is_empty() {
        let pool = create_pool();
        let stats = pool.stats();
        assert_eq!(stats.users, 0);
        assert_eq!(stats.channels, 0);
        assert_eq!(stats.bots, 0);
    }
}
