//! Test fixtures and data factories
//!
//! Provides factory methods for creating test accounts with sensible
//! defaults. All factories create real objects, not mocks.

use renderdesk::User;
use renderdesk::utils::crypto::hash_password;
use uuid::Uuid;

/// Password shared by every factory-made account
pub const TEST_PASSWORD: &str = "studio-pass-2024";

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// Create an active account with the given role
    ///
    /// Usernames are unique per call; the password is [`TEST_PASSWORD`].
    pub fn with_role(role: &str) -> User {
        let suffix = Uuid::new_v4().simple().to_string();
        let suffix = &suffix[..8];

        User::new(
            format!("user_{}", suffix),
            format!("test-{}@nflab.com", suffix),
            "Test User",
            hash_password(TEST_PASSWORD).unwrap(),
            role,
        )
    }

    /// Create an administrator account
    pub fn admin() -> User {
        Self::with_role("admin")
    }

    /// Create a read-only account
    pub fn viewer() -> User {
        Self::with_role("viewer")
    }
}
