//! Permission evaluation against the role registry

use std::sync::Arc;

use tracing::debug;

use crate::core::models::User;

use super::registry::RoleRegistry;
use super::types::{Permission, PermissionCheck, RoleId};

/// Decides whether a user holds a permission
///
/// All authorization decisions in the back office funnel through here. The
/// administrator override lives in this type and nowhere else: whatever the
/// registry says, an admin account passes every check.
pub struct PermissionEvaluator {
    registry: Arc<RoleRegistry>,
}

impl PermissionEvaluator {
    pub fn new(registry: Arc<RoleRegistry>) -> Self {
        Self { registry }
    }

    /// Whether the user holds the permission
    pub fn has_permission(&self, user: &User, permission: Permission) -> bool {
        self.check_permission(user, permission).granted
    }

    /// Check a permission, reporting the resolved role and a denial reason
    pub fn check_permission(&self, user: &User, permission: Permission) -> PermissionCheck {
        let role = RoleId::resolve(&user.role);

        // Administrators pass every check, whatever the registry says.
        if role == RoleId::Admin {
            return PermissionCheck {
                granted: true,
                role,
                denial_reason: None,
            };
        }

        let info = self.registry.get(role);
        if info.has(permission) {
            debug!(
                "Granted '{}' to user '{}' via role '{}'",
                permission, user.username, role
            );
            PermissionCheck {
                granted: true,
                role,
                denial_reason: None,
            }
        } else {
            debug!(
                "Denied '{}' to user '{}' with role '{}'",
                permission, user.username, role
            );
            PermissionCheck {
                granted: false,
                role,
                denial_reason: Some(format!(
                    "role '{}' does not hold permission '{}'",
                    info.name, permission
                )),
            }
        }
    }

    /// Every permission the user currently holds, in catalog order
    pub fn permissions_for(&self, user: &User) -> Vec<Permission> {
        let role = RoleId::resolve(&user.role);
        if role == RoleId::Admin {
            return Permission::ALL.to_vec();
        }
        self.registry.get(role).sorted_permissions()
    }
}
