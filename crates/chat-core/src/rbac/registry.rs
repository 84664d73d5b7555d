//! Permission registry - name to flag catalog

use std::collections::{BTreeSet, HashMap};

use crate::error::RbacError;
use crate::value_objects::Permissions;

/// A registered permission: a unique name bound to one catalog flag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permission {
    name: String,
    flag: Permissions,
}

impl Permission {
    /// Registered name (e.g. `get_stamp`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The catalog flag backing this permission
    #[inline]
    pub fn flag(&self) -> Permissions {
        self.flag
    }
}

/// Catalog of registered permissions
///
/// Append-only while the process initializes, read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct PermissionRegistry {
    by_name: HashMap<String, Permission>,
    registered: Permissions,
}

impl PermissionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every flag of the [`Permissions`] catalog
    pub fn catalog() -> Result<Self, RbacError> {
        let mut registry = Self::new();
        registry.register_catalog()?;
        Ok(registry)
    }

    /// Register every catalog flag under its lowercase name
    pub fn register_catalog(&mut self) -> Result<(), RbacError> {
        for (name, flag) in Permissions::all().iter_names() {
            self.register(name.to_ascii_lowercase(), flag)?;
        }
        Ok(())
    }

    /// Register a permission name for a single catalog flag
    ///
    /// A name or flag that is already registered is a
    /// [`RbacError::DuplicateRegistration`].
    pub fn register(
        &mut self,
        name: impl Into<String>,
        flag: Permissions,
    ) -> Result<&Permission, RbacError> {
        let name = name.into();
        if name.is_empty() || !flag.is_single() {
            return Err(RbacError::InvalidPermission(name));
        }
        if self.by_name.contains_key(&name) || self.registered.intersects(flag) {
            return Err(RbacError::DuplicateRegistration(name));
        }

        self.registered |= flag;
        let permission = Permission {
            name: name.clone(),
            flag,
        };
        Ok(self.by_name.entry(name).or_insert(permission))
    }

    /// Look up a permission by name
    pub fn lookup(&self, name: &str) -> Option<&Permission> {
        self.by_name.get(name)
    }

    /// Resolve a list of names into a flag set
    pub fn resolve<'a, I>(&self, names: I) -> Result<Permissions, RbacError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().try_fold(Permissions::empty(), |acc, name| {
            self.lookup(name)
                .map(|p| acc | p.flag)
                .ok_or_else(|| RbacError::UnknownPermission(name.to_string()))
        })
    }

    /// Check that every bit of `set` belongs to a registered permission
    pub fn covers(&self, set: Permissions) -> bool {
        set.is_subset_of(self.registered)
    }

    /// Union of all registered flags
    pub fn registered(&self) -> Permissions {
        self.registered
    }

    /// Registered names of the permissions in `set`
    pub fn names_of(&self, set: Permissions) -> BTreeSet<&str> {
        self.by_name
            .values()
            .filter(|p| set.contains(p.flag))
            .map(Permission::name)
            .collect()
    }

    /// Iterate over the registered permissions, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.by_name.values()
    }

    /// Number of registered permissions
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup_round_trip() {
        let registry = PermissionRegistry::catalog().unwrap();
        assert_eq!(registry.len(), 60);

        for permission in registry.iter() {
            let found = registry.lookup(permission.name()).unwrap();
            assert_eq!(found, permission);
        }
        assert_eq!(registry.registered(), Permissions::all());
    }

    #[test]
    fn test_lookup_unknown_name() {
        let registry = PermissionRegistry::catalog().unwrap();
        assert!(registry.lookup("launch_rockets").is_none());
        assert!(registry.lookup("GET_STAMP").is_none());
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = PermissionRegistry::new();
        registry.register("get_stamp", Permissions::GET_STAMP).unwrap();

        let err = registry
            .register("get_stamp", Permissions::CREATE_STAMP)
            .unwrap_err();
        assert_eq!(err, RbacError::DuplicateRegistration("get_stamp".to_string()));
    }

    #[test]
    fn test_duplicate_flag_is_rejected() {
        let mut registry = PermissionRegistry::new();
        registry.register("get_stamp", Permissions::GET_STAMP).unwrap();

        let err = registry
            .register("read_stamp", Permissions::GET_STAMP)
            .unwrap_err();
        assert!(matches!(err, RbacError::DuplicateRegistration(_)));
        assert!(registry.lookup("read_stamp").is_none());
    }

    #[test]
    fn test_multi_bit_flag_is_rejected() {
        let mut registry = PermissionRegistry::new();
        let err = registry
            .register("stamps", Permissions::GET_STAMP | Permissions::EDIT_STAMP)
            .unwrap_err();
        assert!(matches!(err, RbacError::InvalidPermission(_)));

        let err = registry.register("nothing", Permissions::empty()).unwrap_err();
        assert!(matches!(err, RbacError::InvalidPermission(_)));
    }

    #[test]
    fn test_resolve_names() {
        let registry = PermissionRegistry::catalog().unwrap();
        let set = registry.resolve(["get_stamp", "create_stamp"]).unwrap();
        assert_eq!(set, Permissions::GET_STAMP | Permissions::CREATE_STAMP);

        let err = registry.resolve(["get_stamp", "get_stanp"]).unwrap_err();
        assert_eq!(err, RbacError::UnknownPermission("get_stanp".to_string()));
    }

    #[test]
    fn test_names_of() {
        let registry = PermissionRegistry::catalog().unwrap();
        let names = registry.names_of(Permissions::GET_WEBHOOK | Permissions::GET_BOT);
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["get_bot", "get_webhook"]);
    }

    #[test]
    fn test_covers() {
        let mut registry = PermissionRegistry::new();
        registry.register("get_stamp", Permissions::GET_STAMP).unwrap();
        assert!(registry.covers(Permissions::GET_STAMP));
        assert!(!registry.covers(Permissions::GET_STAMP | Permissions::EDIT_STAMP));
    }
}
