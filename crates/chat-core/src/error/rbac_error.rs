//! Access-control registry errors
//!
//! These only occur while the registries are being built. Access decisions
//! never produce an error; a lookup miss is a denial.

use thiserror::Error;

/// Errors raised while constructing the permission and role registries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RbacError {
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Duplicate registration: {0}")]
    DuplicateRegistration(String),

    #[error("Invalid permission flag for {0}: exactly one catalog bit is required")]
    InvalidPermission(String),

    #[error("Permission {0} is not granted to any role")]
    UnassignedPermission(String),
}

impl RbacError {
    /// Get an error code string for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownPermission(_) => "UNKNOWN_PERMISSION",
            Self::UnknownRole(_) => "UNKNOWN_ROLE",
            Self::DuplicateRegistration(_) => "DUPLICATE_REGISTRATION",
            Self::InvalidPermission(_) => "INVALID_PERMISSION",
            Self::UnassignedPermission(_) => "UNASSIGNED_PERMISSION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RbacError::DuplicateRegistration("get_stamp".to_string());
        assert_eq!(err.to_string(), "Duplicate registration: get_stamp");
        assert_eq!(err.code(), "DUPLICATE_REGISTRATION");

        let err = RbacError::UnknownRole("ghost".to_string());
        assert_eq!(err.to_string(), "Unknown role: ghost");
    }
}
