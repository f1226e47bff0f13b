//! Role and permission administration

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::auth::gate::AuthorizationGate;
use crate::core::models::User;
use crate::utils::{BackofficeError, Result};

use super::catalog::PERMISSION_CATALOG;
use super::registry::RoleRegistry;
use super::types::{Permission, PermissionDescriptor, RoleId, RolePermissions};

/// Administrative operations over the role registry
///
/// Every operation requires the caller to hold `role_manage`.
pub struct RoleAdministration {
    registry: Arc<RoleRegistry>,
    gate: Arc<AuthorizationGate>,
}

impl RoleAdministration {
    pub fn new(registry: Arc<RoleRegistry>, gate: Arc<AuthorizationGate>) -> Self {
        Self { registry, gate }
    }

    pub(super) fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    pub(super) fn guard(&self, caller: &User) -> Result<()> {
        self.gate.require(caller, Permission::RoleManage)
    }

    /// Every role with its current permission set, highest level first
    pub fn list_roles(&self, caller: &User) -> Result<Vec<RolePermissions>> {
        self.guard(caller)?;

        Ok(self
            .registry
            .all()
            .into_iter()
            .map(RolePermissions::from)
            .collect())
    }

    /// Replace a role's permission set
    ///
    /// The payload is validated in full before the registry is touched, so a
    /// rejected update leaves the role exactly as it was.
    pub fn update_role(
        &self,
        caller: &User,
        role_id: &str,
        permissions: &[String],
    ) -> Result<RolePermissions> {
        self.guard(caller)?;

        let role: RoleId = role_id
            .parse()
            .map_err(|_| BackofficeError::not_found(format!("Role not found: {}", role_id)))?;

        let mut next = HashSet::with_capacity(permissions.len());
        for raw in permissions {
            let permission: Permission = raw
                .parse()
                .map_err(|_| BackofficeError::validation(format!("Unknown permission: {}", raw)))?;
            next.insert(permission);
        }

        let caller_role = RoleId::resolve(&caller.role);
        let info = self.registry.set_permissions(role, next, caller_role)?;

        info!(
            "User '{}' updated role '{}' to {} permissions",
            caller.username,
            role,
            info.permissions.len()
        );

        Ok(info.into())
    }

    /// The complete permission catalog
    pub fn list_permissions(&self, caller: &User) -> Result<Vec<PermissionDescriptor>> {
        self.guard(caller)?;

        Ok(PERMISSION_CATALOG.to_vec())
    }
}
