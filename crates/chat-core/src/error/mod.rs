//! Domain and access-control error types

mod domain_error;
mod rbac_error;

pub use domain_error::DomainError;
pub use rbac_error::RbacError;
