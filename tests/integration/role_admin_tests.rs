//! Role administration integration tests
//!
//! Exercises the administration operations through the full system,
//! including the authorization checks that guard them.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use renderdesk::{BackofficeError, Permission, RoleId};

    use crate::common::{TestSystem, UserFactory};

    // ==================== Live reconfiguration ====================

    /// Registry edits change authorization decisions immediately
    #[tokio::test]
    async fn test_admin_edit_changes_decisions_immediately() {
        let harness = TestSystem::new();
        let admin = harness.seed(UserFactory::admin()).await;
        let viewer = harness.seed(UserFactory::viewer()).await;

        assert!(
            !harness
                .system
                .evaluator()
                .has_permission(&viewer, Permission::ProjectCreate)
        );

        harness
            .system
            .role_admin()
            .update_role(
                &admin,
                "viewer",
                &[
                    "project_read".to_string(),
                    "project_create".to_string(),
                    "client_read".to_string(),
                    "team_read".to_string(),
                    "file_download".to_string(),
                ],
            )
            .unwrap();

        assert!(
            harness
                .system
                .evaluator()
                .has_permission(&viewer, Permission::ProjectCreate)
        );

        let matrix = harness
            .system
            .role_admin()
            .permission_matrix(&admin)
            .unwrap();
        assert!(
            matrix
                .matrix
                .get(&RoleId::Viewer)
                .unwrap()
                .contains(&Permission::ProjectCreate)
        );
    }

    /// Stripping a role locks its members out at the gate
    #[tokio::test]
    async fn test_stripped_role_hits_the_gate() {
        let harness = TestSystem::new();
        let admin = harness.seed(UserFactory::admin()).await;
        let viewer = harness.seed(UserFactory::viewer()).await;

        harness
            .system
            .role_admin()
            .update_role(&admin, "viewer", &[])
            .unwrap();

        let err = harness
            .system
            .gate()
            .require(&viewer, Permission::ProjectRead)
            .unwrap_err();
        assert!(matches!(err, BackofficeError::Forbidden(_)));

        let ran = AtomicBool::new(false);
        let result = harness
            .system
            .gate()
            .protect(&viewer, Permission::ProjectRead, || async {
                ran.store(true, Ordering::SeqCst);
                Ok(())
            })
            .await;

        assert!(result.is_err());
        assert!(!ran.load(Ordering::SeqCst));
    }

    /// Admins keep full access even after their configured set is emptied
    #[tokio::test]
    async fn test_admin_override_after_self_edit() {
        let harness = TestSystem::new();
        let admin = harness.seed(UserFactory::admin()).await;

        harness
            .system
            .role_admin()
            .update_role(&admin, "admin", &[])
            .unwrap();

        for permission in Permission::ALL {
            assert!(harness.system.evaluator().has_permission(&admin, permission));
        }

        // Administration itself still works
        let listing = harness.system.role_admin().list_roles(&admin).unwrap();
        assert_eq!(listing[0].permission_count, 0);
    }

    // ==================== Access control on administration ====================

    /// Regular staff cannot reach any administration operation
    #[tokio::test]
    async fn test_designer_cannot_reach_administration() {
        let harness = TestSystem::new();
        let designer = harness.seed(UserFactory::with_role("designer")).await;

        assert!(matches!(
            harness.system.role_admin().list_roles(&designer),
            Err(BackofficeError::Forbidden(_))
        ));
        assert!(matches!(
            harness.system.role_admin().list_permissions(&designer),
            Err(BackofficeError::Forbidden(_))
        ));
        assert!(matches!(
            harness.system.role_admin().permission_matrix(&designer),
            Err(BackofficeError::Forbidden(_))
        ));
        assert!(matches!(
            harness.system.role_admin().update_role(&designer, "viewer", &[]),
            Err(BackofficeError::Forbidden(_))
        ));
    }

    /// Holding `role_manage` is not enough to edit the administrator role
    #[tokio::test]
    async fn test_role_manage_does_not_unlock_admin_role() {
        let harness = TestSystem::new();
        let admin = harness.seed(UserFactory::admin()).await;
        let manager = harness.seed(UserFactory::with_role("manager")).await;

        harness
            .system
            .role_admin()
            .update_role(&admin, "manager", &["role_manage".to_string()])
            .unwrap();

        // The manager can now administer other roles
        assert!(harness.system.role_admin().list_roles(&manager).is_ok());

        // But the admin role stays closed
        let err = harness
            .system
            .role_admin()
            .update_role(&manager, "admin", &["project_read".to_string()])
            .unwrap_err();
        assert!(matches!(err, BackofficeError::Forbidden(_)));
    }

    // ==================== Validation ====================

    /// Bad updates are rejected without touching the registry
    #[tokio::test]
    async fn test_update_role_error_paths() {
        let harness = TestSystem::new();
        let admin = harness.seed(UserFactory::admin()).await;

        let missing = harness
            .system
            .role_admin()
            .update_role(&admin, "superuser", &[])
            .unwrap_err();
        assert!(matches!(missing, BackofficeError::NotFound(_)));

        let invalid = harness
            .system
            .role_admin()
            .update_role(
                &admin,
                "viewer",
                &["project_read".to_string(), "fly".to_string()],
            )
            .unwrap_err();
        assert!(matches!(invalid, BackofficeError::Validation(_)));

        // The failed update left the viewer defaults alone
        let listing = harness.system.role_admin().list_roles(&admin).unwrap();
        let viewer_row = listing
            .iter()
            .find(|row| row.role == RoleId::Viewer)
            .unwrap();
        assert_eq!(viewer_row.permission_count, 4);
    }

    // ==================== Reporting ====================

    /// The matrix and the role listing always agree
    #[tokio::test]
    async fn test_matrix_and_listing_agree() {
        let harness = TestSystem::new();
        let admin = harness.seed(UserFactory::admin()).await;

        // Perturb one role first so the test is not trivially about defaults
        harness
            .system
            .role_admin()
            .update_role(&admin, "sales", &["client_read".to_string()])
            .unwrap();

        let matrix = harness
            .system
            .role_admin()
            .permission_matrix(&admin)
            .unwrap();
        let listing = harness.system.role_admin().list_roles(&admin).unwrap();

        for row in &listing {
            assert_eq!(matrix.matrix.get(&row.role), Some(&row.permissions));
        }

        let ids: Vec<u16> = matrix.permissions.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, (1..=32).collect::<Vec<u16>>());
    }
}
