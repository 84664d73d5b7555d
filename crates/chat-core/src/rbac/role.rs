//! Roles - named, immutable permission sets

use std::collections::HashMap;

use crate::error::RbacError;
use crate::value_objects::Permissions;

use super::registry::PermissionRegistry;

/// A named set of permissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    name: String,
    permissions: Permissions,
}

impl Role {
    /// Role name (e.g. `read`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The flat permission set owned by this role
    #[inline]
    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Check if this role grants a specific permission
    #[inline]
    pub fn has_permission(&self, permission: Permissions) -> bool {
        self.permissions.has(permission)
    }

    /// Check if this role grants everything `other` grants
    pub fn is_superset_of(&self, other: &Role) -> bool {
        other.permissions.is_subset_of(self.permissions)
    }
}

/// Registry of defined roles
#[derive(Debug, Default, Clone)]
pub struct RoleRegistry {
    roles: HashMap<String, Role>,
}

impl RoleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a role from a permission set
    ///
    /// Every bit of `permissions` must be registered in `catalog`.
    pub fn define_role(
        &mut self,
        catalog: &PermissionRegistry,
        name: impl Into<String>,
        permissions: Permissions,
    ) -> Result<&Role, RbacError> {
        let name = name.into();
        if self.roles.contains_key(&name) {
            return Err(RbacError::DuplicateRegistration(name));
        }
        if !catalog.covers(permissions) {
            let unknown = permissions.difference(catalog.registered());
            let label = unknown
                .iter_names()
                .next()
                .map_or_else(|| format!("{:#x}", unknown.bits()), |(n, _)| n.to_ascii_lowercase());
            return Err(RbacError::UnknownPermission(label));
        }

        let role = Role {
            name: name.clone(),
            permissions,
        };
        Ok(self.roles.entry(name).or_insert(role))
    }

    /// Look up a role by name
    pub fn lookup(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    /// Union of the permission sets of already-defined roles
    pub fn permissions_of(&self, names: &[&str]) -> Result<Permissions, RbacError> {
        names.iter().try_fold(Permissions::empty(), |acc, name| {
            self.lookup(name)
                .map(|role| acc | role.permissions)
                .ok_or_else(|| RbacError::UnknownRole((*name).to_string()))
        })
    }

    /// Union of every role's permissions
    pub fn granted(&self) -> Permissions {
        Permissions::combine(self.roles.values().map(Role::permissions))
    }

    /// Iterate over the defined roles, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    /// Number of defined roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no role has been defined yet
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
