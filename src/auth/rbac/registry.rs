//! Role registry holding the studio's role-to-permission configuration

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::utils::{BackofficeError, Result};

use super::catalog;
use super::types::{Permission, RoleId, RoleInfo};

/// In-memory registry of role definitions
///
/// Every role is seeded from the built-in catalog at construction. Permission
/// sets can be replaced at runtime; role identity, display names, and levels
/// are fixed.
pub struct RoleRegistry {
    roles: RwLock<HashMap<RoleId, RoleInfo>>,
}

impl RoleRegistry {
    /// Create a registry seeded with the built-in role definitions
    pub fn new() -> Self {
        let roles: HashMap<RoleId, RoleInfo> = RoleId::ALL
            .iter()
            .map(|&role| (role, catalog::default_role_info(role)))
            .collect();

        debug!("Role registry seeded with {} built-in roles", roles.len());

        Self {
            roles: RwLock::new(roles),
        }
    }

    /// Current definition of a role
    pub fn get(&self, role: RoleId) -> RoleInfo {
        self.roles
            .read()
            .get(&role)
            .cloned()
            .unwrap_or_else(|| catalog::default_role_info(role))
    }

    /// Current definition for a stored role identifier, unknown values
    /// resolving to the viewer role
    pub fn resolve(&self, identifier: &str) -> RoleInfo {
        self.get(RoleId::resolve(identifier))
    }

    /// All role definitions, highest authority level first
    pub fn all(&self) -> Vec<RoleInfo> {
        let roles = self.roles.read();
        RoleId::ALL
            .iter()
            .map(|role| {
                roles
                    .get(role)
                    .cloned()
                    .unwrap_or_else(|| catalog::default_role_info(*role))
            })
            .collect()
    }

    /// Replace a role's permission set
    ///
    /// The new set is taken wholesale; an empty set strips the role of every
    /// permission. Only administrators may touch the administrator role.
    pub fn set_permissions(
        &self,
        role: RoleId,
        permissions: HashSet<Permission>,
        caller_role: RoleId,
    ) -> Result<RoleInfo> {
        if role == RoleId::Admin && caller_role != RoleId::Admin {
            warn!(
                "Blocked attempt to modify the administrator role by a {} caller",
                caller_role
            );
            return Err(BackofficeError::forbidden(
                "Only administrators may modify the administrator role",
            ));
        }

        let mut roles = self.roles.write();
        let info = roles
            .entry(role)
            .or_insert_with(|| catalog::default_role_info(role));
        info.permissions = permissions;

        info!(
            "Role '{}' now grants {} permissions",
            role,
            info.permissions.len()
        );

        Ok(info.clone())
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
