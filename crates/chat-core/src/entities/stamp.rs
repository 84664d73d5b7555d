//! Stamp entity - a custom emoji-like image

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

use super::check_name;

/// Maximum length of a stamp name
pub const STAMP_NAME_MAX_LEN: usize = 32;

/// Stamp entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: Uuid,
    pub name: String,
    pub creator_id: Uuid,
    /// Image file; files are stored elsewhere
    pub file_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stamp {
    /// Create a new Stamp
    pub fn new(id: Uuid, name: String, creator_id: Uuid, file_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            creator_id,
            file_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether `user_id` created this stamp
    #[inline]
    pub fn is_created_by(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }

    /// Rename the stamp
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Replace the image file
    pub fn set_file(&mut self, file_id: Option<Uuid>) {
        self.file_id = file_id;
        self.updated_at = Utc::now();
    }
}

/// Validate a stamp name: 1-32 characters of `[A-Za-z0-9_-]`
pub fn validate_stamp_name(name: &str) -> Result<(), DomainError> {
    check_name("stamp name", name, STAMP_NAME_MAX_LEN, true)
}
