//! User group entity

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

use super::check_name;

/// Maximum length of a user group name
pub const USER_GROUP_NAME_MAX_LEN: usize = 30;

/// A named group of users, managed by its admins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroup {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Free-form classification (e.g. `grade`, `team`)
    pub group_type: String,
    pub admin_ids: BTreeSet<Uuid>,
    pub member_ids: BTreeSet<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserGroup {
    /// Create a new group; the creator becomes its first admin
    pub fn new(
        id: Uuid,
        name: String,
        description: String,
        group_type: String,
        creator_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description,
            group_type,
            admin_ids: BTreeSet::from([creator_id]),
            member_ids: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user_id` administers this group
    #[inline]
    pub fn is_admin(&self, user_id: Uuid) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Check whether `user_id` belongs to this group
    #[inline]
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.member_ids.contains(&user_id)
    }

    /// Add a member; returns false if already present
    pub fn add_member(&mut self, user_id: Uuid) -> bool {
        let added = self.member_ids.insert(user_id);
        if added {
            self.updated_at = Utc::now();
        }
        added
    }
}

/// Validate a user group name: 1-30 characters
pub fn validate_user_group_name(name: &str) -> Result<(), DomainError> {
    check_name("user group name", name, USER_GROUP_NAME_MAX_LEN, false)
}
