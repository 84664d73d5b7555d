//! Access decisions
//!
//! [`Rbac`] bundles the permission and role registries once they are fully
//! built. It is immutable and shared behind an `Arc` by every request task.

use std::collections::BTreeSet;

use crate::error::RbacError;
use crate::value_objects::Permissions;

use super::registry::{Permission, PermissionRegistry};
use super::role::{Role, RoleRegistry};

/// Immutable access-control model
#[derive(Debug, Clone)]
pub struct Rbac {
    permissions: PermissionRegistry,
    roles: RoleRegistry,
}

impl Rbac {
    /// Start building a model
    pub fn builder() -> RbacBuilder {
        RbacBuilder::default()
    }

    /// Decide whether `role` holds the permission called `permission`
    ///
    /// Unknown role or permission names are denied.
    pub fn is_allowed(&self, role: &str, permission: &str) -> bool {
        let Some(role) = self.roles.lookup(role) else {
            return false;
        };
        let Some(permission) = self.permissions.lookup(permission) else {
            return false;
        };
        role.has_permission(permission.flag())
    }

    /// Typed variant of [`Rbac::is_allowed`]
    ///
    /// `permission` may hold several flags; all of them are required.
    pub fn is_granted(&self, role: &str, permission: Permissions) -> bool {
        self.roles
            .lookup(role)
            .is_some_and(|role| role.has_permission(permission))
    }

    /// Permission names granted to `role`, or `None` for an unknown role
    pub fn role_permissions(&self, role: &str) -> Option<BTreeSet<&str>> {
        self.roles
            .lookup(role)
            .map(|role| self.permissions.names_of(role.permissions()))
    }

    /// Look up a registered permission
    pub fn permission(&self, name: &str) -> Option<&Permission> {
        self.permissions.lookup(name)
    }

    /// Look up a defined role
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.lookup(name)
    }

    /// Iterate over the defined roles
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    /// The permission catalog
    pub fn permissions(&self) -> &PermissionRegistry {
        &self.permissions
    }

    /// Check that every registered permission is granted to some role
    pub fn validate(&self) -> Result<(), RbacError> {
        let unassigned = self.permissions.registered().difference(self.roles.granted());
        match self.permissions.names_of(unassigned).into_iter().next() {
            Some(name) => Err(RbacError::UnassignedPermission(name.to_string())),
            None => Ok(()),
        }
    }
}

/// Builder used during initialization
#[derive(Debug, Default)]
pub struct RbacBuilder {
    permissions: PermissionRegistry,
    roles: RoleRegistry,
}

impl RbacBuilder {
    /// Register every flag of the [`Permissions`] catalog
    pub fn with_catalog(mut self) -> Result<Self, RbacError> {
        self.permissions.register_catalog()?;
        Ok(self)
    }

    /// Register a single permission
    pub fn permission(mut self, name: &str, flag: Permissions) -> Result<Self, RbacError> {
        self.permissions.register(name, flag)?;
        Ok(self)
    }

    /// Define a role from a flag set
    pub fn role(mut self, name: &str, permissions: Permissions) -> Result<Self, RbacError> {
        self.roles.define_role(&self.permissions, name, permissions)?;
        Ok(self)
    }

    /// Define a role as the union of existing roles plus extra flags
    pub fn role_union(
        mut self,
        name: &str,
        bases: &[&str],
        extra: Permissions,
    ) -> Result<Self, RbacError> {
        let permissions = self.roles.permissions_of(bases)? | extra;
        self.roles.define_role(&self.permissions, name, permissions)?;
        Ok(self)
    }

    /// Define a role from permission names
    pub fn role_from_names(mut self, name: &str, permissions: &[&str]) -> Result<Self, RbacError> {
        let set = self.permissions.resolve(permissions.iter().copied())?;
        self.roles.define_role(&self.permissions, name, set)?;
        Ok(self)
    }

    /// Define a role holding every registered permission
    pub fn role_with_all(mut self, name: &str) -> Result<Self, RbacError> {
        let all = self.permissions.registered();
        self.roles.define_role(&self.permissions, name, all)?;
        Ok(self)
    }

    /// Finish building
    ///
    /// Fails if a registered permission is not granted to any role.
    pub fn build(self) -> Result<Rbac, RbacError> {
        let rbac = Rbac {
            permissions: self.permissions,
            roles: self.roles,
        };
        rbac.validate()?;
        Ok(rbac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_model() -> Rbac {
        Rbac::builder()
            .permission("get_stamp", Permissions::GET_STAMP)
            .unwrap()
            .permission("create_stamp", Permissions::CREATE_STAMP)
            .unwrap()
            .role("viewer", Permissions::GET_STAMP)
            .unwrap()
            .role_union("editor", &["viewer"], Permissions::CREATE_STAMP)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_is_allowed() {
        let rbac = small_model();
        assert!(rbac.is_allowed("viewer", "get_stamp"));
        assert!(!rbac.is_allowed("viewer", "create_stamp"));
        assert!(rbac.is_allowed("editor", "get_stamp"));
        assert!(rbac.is_allowed("editor", "create_stamp"));
    }

    #[test]
    fn test_unknown_role_is_denied() {
        let rbac = small_model();
        assert!(!rbac.is_allowed("ghost", "get_stamp"));
        assert!(!rbac.is_granted("ghost", Permissions::GET_STAMP));
        assert!(rbac.role_permissions("ghost").is_none());
    }

    #[test]
    fn test_unknown_permission_is_denied() {
        let rbac = small_model();
        assert!(!rbac.is_allowed("editor", "delete_stamp"));
        assert!(!rbac.is_allowed("editor", ""));
        // Registered in the flag catalog but not in this model
        assert!(!rbac.is_granted("editor", Permissions::DELETE_STAMP));
    }

    #[test]
    fn test_is_granted_requires_every_flag() {
        let rbac = small_model();
        assert!(rbac.is_granted("editor", Permissions::GET_STAMP | Permissions::CREATE_STAMP));
        assert!(!rbac.is_granted("viewer", Permissions::GET_STAMP | Permissions::CREATE_STAMP));
        assert!(!rbac.is_granted("editor", Permissions::empty()));
    }

    #[test]
    fn test_role_permissions() {
        let rbac = small_model();
        let names = rbac.role_permissions("editor").unwrap();
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["create_stamp", "get_stamp"]);
    }

    #[test]
    fn test_role_from_names_rejects_typos() {
        let err = Rbac::builder()
            .with_catalog()
            .unwrap()
            .role_from_names("viewer", &["get_stamp", "get_chanel"])
            .unwrap_err();
        assert_eq!(err, RbacError::UnknownPermission("get_chanel".to_string()));
    }

    #[test]
    fn test_build_rejects_unassigned_permission() {
        let err = Rbac::builder()
            .permission("get_stamp", Permissions::GET_STAMP)
            .unwrap()
            .permission("create_stamp", Permissions::CREATE_STAMP)
            .unwrap()
            .role("viewer", Permissions::GET_STAMP)
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, RbacError::UnassignedPermission("create_stamp".to_string()));
    }

    #[test]
    fn test_union_with_undefined_base() {
        let err = Rbac::builder()
            .with_catalog()
            .unwrap()
            .role_union("write", &["read"], Permissions::POST_MESSAGE)
            .unwrap_err();
        assert_eq!(err, RbacError::UnknownRole("read".to_string()));
    }

    #[test]
    fn test_catalog_after_manual_permission_is_duplicate() {
        let err = Rbac::builder()
            .permission("get_stamp", Permissions::GET_STAMP)
            .unwrap()
            .with_catalog()
            .unwrap_err();
        assert_eq!(err, RbacError::DuplicateRegistration("get_stamp".to_string()));
    }

    #[test]
    fn test_shared_across_threads() {
        let rbac = std::sync::Arc::new(small_model());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rbac = rbac.clone();
                std::thread::spawn(move || rbac.is_allowed("viewer", "get_stamp"))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
