//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use chat_common::AppError;
use chat_core::DomainError;
use thiserror::Error;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Domain rule violation, including repository failures
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Application error (auth, validation, etc.)
    #[error(transparent)]
    App(#[from] AppError),

    /// The acting subject's role lacks `permission`
    #[error("Missing required permission: {permission}")]
    PermissionDenied { permission: String },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    /// Create a permission denied error
    pub fn permission_denied(permission: impl Into<String>) -> Self {
        Self::PermissionDenied {
            permission: permission.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::PermissionDenied { .. } => 403,
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::PermissionDenied { .. } => "MISSING_PERMISSIONS",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::PermissionDenied { permission } => {
                AppError::Domain(DomainError::MissingPermission(permission))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::from(DomainError::UserNotFound(uuid::Uuid::nil()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_USER");
    }

    #[test]
    fn test_permission_denied_error() {
        let err = ServiceError::permission_denied("create_stamp");
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "MISSING_PERMISSIONS");
        assert!(err.to_string().contains("create_stamp"));

        let app_err: AppError = err.into();
        assert_eq!(app_err.status_code(), 403);
        assert_eq!(app_err.error_code(), "MISSING_PERMISSIONS");
    }

    #[test]
    fn test_domain_error_status() {
        let err = ServiceError::from(DomainError::NotCreator);
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "NOT_CREATOR");

        assert_eq!(ServiceError::from(DomainError::AlreadyPinned).status_code(), 409);
        assert_eq!(ServiceError::from(DomainError::NilId).status_code(), 400);
        assert_eq!(
            ServiceError::from(DomainError::DatabaseError("x".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("name must be 1-32 characters");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_convert_to_app_error() {
        let service_err = ServiceError::from(DomainError::WebhookNotFound(uuid::Uuid::nil()));
        let app_err: AppError = service_err.into();
        assert_eq!(app_err.status_code(), 404);
    }
}
