//! Role-based access control
//!
//! Permissions and roles are registered once at startup and frozen into an
//! [`Rbac`] value. Decisions never fail: any lookup miss is a deny.

mod access;
mod registry;
mod role;
pub mod roles;

pub use access::{Rbac, RbacBuilder};
pub use registry::{Permission, PermissionRegistry};
pub use role::{Role, RoleRegistry};
