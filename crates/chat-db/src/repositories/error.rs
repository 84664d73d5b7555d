//! Error handling utilities for repositories

use chat_core::error::DomainError;
use chat_core::traits::RepoResult;
use uuid::Uuid;

/// Reject the nil UUID for operations that modify a row
pub fn ensure_not_nil(id: Uuid) -> RepoResult<()> {
    if id.is_nil() {
        Err(DomainError::NilId)
    } else {
        Ok(())
    }
}

/// Create a "user not found" error
pub fn user_not_found(id: Uuid) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "channel not found" error
pub fn channel_not_found(id: Uuid) -> DomainError {
    DomainError::ChannelNotFound(id)
}

/// Create a "message not found" error
pub fn message_not_found(id: Uuid) -> DomainError {
    DomainError::MessageNotFound(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_not_nil() {
        assert!(matches!(ensure_not_nil(Uuid::nil()), Err(DomainError::NilId)));
        assert!(ensure_not_nil(Uuid::new_v4()).is_ok());
    }
}
