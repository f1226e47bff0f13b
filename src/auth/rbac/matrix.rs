//! Permission matrix assembly

use std::collections::BTreeMap;

use crate::core::models::User;
use crate::utils::Result;

use super::admin::RoleAdministration;
use super::catalog::PERMISSION_CATALOG;
use super::types::{PermissionMatrix, RoleSummary};

impl RoleAdministration {
    /// Build the full role-to-permission matrix
    ///
    /// The matrix reflects the registry's configured sets. The administrator
    /// override applies at evaluation time only, so an edited admin row shows
    /// the configured set even though admins keep passing every check.
    pub fn permission_matrix(&self, caller: &User) -> Result<PermissionMatrix> {
        self.guard(caller)?;

        let roles = self.registry().all();

        let matrix: BTreeMap<_, _> = roles
            .iter()
            .map(|info| (info.role, info.sorted_permissions()))
            .collect();

        Ok(PermissionMatrix {
            roles: roles.into_iter().map(RoleSummary::from).collect(),
            permissions: PERMISSION_CATALOG.to_vec(),
            matrix,
        })
    }
}
