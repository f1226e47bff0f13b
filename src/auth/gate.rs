//! Authorization gate guarding privileged operations

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::models::User;
use crate::utils::{BackofficeError, Result};

use super::rbac::{Permission, PermissionEvaluator};

/// Turns permission checks into pass/fail outcomes for call sites
///
/// Handlers either `require` a permission up front or wrap the whole
/// operation in `protect`, which never runs the operation on denial.
pub struct AuthorizationGate {
    evaluator: Arc<PermissionEvaluator>,
}

impl AuthorizationGate {
    pub fn new(evaluator: Arc<PermissionEvaluator>) -> Self {
        Self { evaluator }
    }

    /// Require a permission, converting denial into a `Forbidden` error
    pub fn require(&self, user: &User, permission: Permission) -> Result<()> {
        let check = self.evaluator.check_permission(user, permission);
        if check.granted {
            debug!("User '{}' cleared for '{}'", user.username, permission);
            return Ok(());
        }

        let reason = check
            .denial_reason
            .unwrap_or_else(|| format!("permission '{}' denied", permission));
        warn!("User '{}' blocked: {}", user.username, reason);
        Err(BackofficeError::Forbidden(reason))
    }

    /// Run an operation only if the user holds the permission
    ///
    /// On denial the operation is never started and the denial reason comes
    /// back as a `Forbidden` error.
    pub async fn protect<T, F, Fut>(&self, user: &User, permission: Permission, op: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.require(user, permission)?;
        op().await
    }
}
