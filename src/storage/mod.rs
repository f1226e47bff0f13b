//! Account storage for the back office
//!
//! Authentication only needs a narrow view of wherever accounts live, so the
//! seam is a small trait. The bundled in-memory implementation backs tests
//! and single-process deployments.

pub mod memory;

pub use memory::MemoryUserStore;

use uuid::Uuid;

use crate::core::models::User;
use crate::utils::Result;

/// Account lookup and the few mutations authentication performs
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch an account by id
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Fetch an account by username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Persist a new account
    async fn create_user(&self, user: User) -> Result<User>;

    /// Record a successful login
    async fn update_last_login(&self, id: Uuid) -> Result<()>;

    /// Replace an account's password hash
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<()>;
}
