//! Pre-wired authentication system for integration tests

use std::sync::Arc;

use renderdesk::{AuthSystem, Config, LoginResponse, MemoryUserStore, User, UserStore};
use tracing_subscriber::EnvFilter;

use super::fixtures::{TEST_PASSWORD, UserFactory};

/// Route crate logs through the test harness; `RUST_LOG` overrides
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("renderdesk=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Configuration suitable for tests
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.backoffice.auth.jwt_secret =
        "Integration-Test-Secret-0123456789-0123456789".to_string();
    config.backoffice.auth.jwt_expiration = 3600;
    config
}

/// An authentication system over a fresh in-memory store
pub struct TestSystem {
    pub system: AuthSystem,
    pub store: Arc<MemoryUserStore>,
}

impl TestSystem {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: Config) -> Self {
        init_test_logging();

        let store = Arc::new(MemoryUserStore::new());
        let system = AuthSystem::new(&config, store.clone());
        Self { system, store }
    }

    /// Store an account and hand it back
    pub async fn seed(&self, user: User) -> User {
        self.store.create_user(user).await.unwrap()
    }

    /// Seed a fresh account with the given role and log it in
    pub async fn login_as(&self, role: &str) -> (User, LoginResponse) {
        let user = self.seed(UserFactory::with_role(role)).await;
        let response = self
            .system
            .login(&user.username, TEST_PASSWORD)
            .await
            .unwrap();
        (user, response)
    }
}

impl Default for TestSystem {
    fn default() -> Self {
        Self::new()
    }
}
