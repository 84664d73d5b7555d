//! User entity - represents a chat user or a bot account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::rbac::roles;

use super::check_name;

/// Maximum length of a user name
pub const USER_NAME_MAX_LEN: usize = 32;

/// Account state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserState {
    /// Account is usable
    #[default]
    Active,
    /// Account was closed by its owner or an administrator
    Deactivated,
    /// Account is temporarily locked
    Suspended,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    /// Name of the assigned role
    pub role: String,
    pub bot: bool,
    pub state: UserState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new human user
    pub fn new(id: Uuid, name: String, role: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            display_name: name.clone(),
            name,
            role: role.into(),
            bot: false,
            state: UserState::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new bot account with the `bot` role
    pub fn new_bot(id: Uuid, name: String, display_name: String) -> Self {
        let mut user = Self::new(id, name, roles::BOT);
        user.display_name = display_name;
        user.bot = true;
        user
    }

    /// Check if user is a bot account
    #[inline]
    pub fn is_bot(&self) -> bool {
        self.bot
    }

    /// Check if the account can act
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == UserState::Active
    }

    /// Update the display name
    pub fn set_display_name(&mut self, display_name: String) {
        self.display_name = display_name;
        self.updated_at = Utc::now();
    }

    /// Update the account state
    pub fn set_state(&mut self, state: UserState) {
        self.state = state;
        self.updated_at = Utc::now();
    }
}

/// Validate a user name: 1-32 characters of `[A-Za-z0-9_-]`
pub fn validate_user_name(name: &str) -> Result<(), DomainError> {
    check_name("user name", name, USER_NAME_MAX_LEN, true)
}
