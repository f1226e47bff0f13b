//! In-memory user store

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::core::models::User;
use crate::utils::{BackofficeError, Result};

use super::UserStore;

/// Process-local account store
///
/// Usernames are unique; lookups by username scan the map, which is fine at
/// back-office head counts.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: User) -> Result<User> {
        let mut users = self.users.write();

        if users.values().any(|existing| existing.username == user.username) {
            return Err(BackofficeError::validation(format!(
                "Username already taken: {}",
                user.username
            )));
        }

        debug!("Storing account '{}'", user.username);
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn update_last_login(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.write();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| BackofficeError::not_found(format!("User not found: {}", id)))?;
        user.update_last_login();
        Ok(())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<()> {
        let mut users = self.users.write();
        let user = users
            .get_mut(&id)
            .ok_or_else(|| BackofficeError::not_found(format!("User not found: {}", id)))?;
        user.password_hash = password_hash.to_string();
        user.metadata.touch();
        Ok(())
    }
}
