//! Authentication flow integration tests
//!
//! End-to-end coverage of login, token verification, and the account
//! checks that sit between them.

#[cfg(test)]
mod tests {
    use renderdesk::config::BootstrapAdminConfig;
    use renderdesk::{BackofficeError, Permission, RoleId, UserStatus};

    use crate::common::system::test_config;
    use crate::common::{TEST_PASSWORD, TestSystem, UserFactory};

    // ==================== Login and token flows ====================

    /// Login produces a token that authenticates straight back to the account
    #[tokio::test]
    async fn test_full_login_cycle() {
        let harness = TestSystem::new();
        let (seeded, response) = harness.login_as("designer").await;

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user.role, RoleId::Designer);
        assert_eq!(response.permissions.len(), 7);

        let header = format!("Bearer {}", response.access_token);
        let user = harness.system.authenticate_header(&header).await.unwrap();
        assert_eq!(user.id(), seeded.id());

        let check = harness
            .system
            .check_permission(&user, Permission::FileGeneratePdf);
        assert!(check.has_permission);
    }

    /// Unknown usernames and wrong passwords produce the same error
    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let harness = TestSystem::new();
        let (seeded, _) = harness.login_as("sales").await;

        let unknown = harness
            .system
            .login("no-such-account", TEST_PASSWORD)
            .await
            .unwrap_err();
        let wrong = harness
            .system
            .login(&seeded.username, "bad-password")
            .await
            .unwrap_err();

        match (unknown, wrong) {
            (BackofficeError::Unauthenticated(a), BackofficeError::Unauthenticated(b)) => {
                assert_eq!(a, b);
            }
            other => panic!("Expected two Unauthenticated errors, got {:?}", other),
        }
    }

    /// Disabled accounts can neither log in nor use an existing token
    #[tokio::test]
    async fn test_disabled_account_is_locked_out() {
        let harness = TestSystem::new();

        let mut user = UserFactory::with_role("manager");
        user.status = UserStatus::Suspended;
        let user = harness.seed(user).await;

        let login_err = harness
            .system
            .login(&user.username, TEST_PASSWORD)
            .await
            .unwrap_err();
        assert!(matches!(login_err, BackofficeError::Forbidden(_)));

        let token = harness.system.jwt().create_access_token(&user).unwrap();
        let token_err = harness.system.authenticate(&token).await.unwrap_err();
        assert!(matches!(token_err, BackofficeError::Forbidden(_)));
    }

    /// Access tokens are stateless and keep working after a password change
    #[tokio::test]
    async fn test_tokens_survive_password_change() {
        let harness = TestSystem::new();
        let (seeded, response) = harness.login_as("manager").await;

        harness
            .system
            .change_password(seeded.id(), TEST_PASSWORD, "fresh-password-1")
            .await
            .unwrap();

        // The old token still resolves; the old password does not
        assert!(
            harness
                .system
                .authenticate(&response.access_token)
                .await
                .is_ok()
        );
        assert!(
            harness
                .system
                .login(&seeded.username, TEST_PASSWORD)
                .await
                .is_err()
        );
        assert!(
            harness
                .system
                .login(&seeded.username, "fresh-password-1")
                .await
                .is_ok()
        );
    }

    // ==================== Role resolution ====================

    /// Accounts with unrecognized role identifiers act as viewers
    #[tokio::test]
    async fn test_unknown_role_gets_viewer_treatment() {
        let harness = TestSystem::new();
        let (seeded, response) = harness.login_as("art_director").await;

        assert_eq!(response.user.role, RoleId::Viewer);
        assert_eq!(response.permissions.len(), 4);

        let check = harness
            .system
            .check_permission(&seeded, Permission::ProjectDelete);
        assert!(!check.has_permission);
        assert_eq!(check.role, RoleId::Viewer);
        assert!(check.reason.unwrap().contains("Viewer"));
    }

    // ==================== Bootstrap ====================

    /// A bootstrapped administrator can log in and run administration
    #[tokio::test]
    async fn test_bootstrap_then_administer() {
        let mut config = test_config();
        config.backoffice.access.bootstrap_admin = Some(BootstrapAdminConfig {
            username: "admin".to_string(),
            email: "admin@nflab.com".to_string(),
            display_name: "System Administrator".to_string(),
            password: "rotate-me-soon".to_string(),
        });

        let harness = TestSystem::with_config(config);
        harness.system.bootstrap_admin().await.unwrap().unwrap();

        let response = harness
            .system
            .login("admin", "rotate-me-soon")
            .await
            .unwrap();
        let admin = harness
            .system
            .authenticate(&response.access_token)
            .await
            .unwrap();

        let matrix = harness
            .system
            .role_admin()
            .permission_matrix(&admin)
            .unwrap();
        assert_eq!(matrix.roles.len(), 6);
        assert_eq!(matrix.permissions.len(), 32);
    }
}
