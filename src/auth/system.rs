//! Core authentication system implementation

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::core::models::User;
use crate::storage::UserStore;
use crate::utils::crypto::{hash_password, verify_password};
use crate::utils::{BackofficeError, Result};

use super::gate::AuthorizationGate;
use super::jwt::JwtHandler;
use super::rbac::{
    Permission, PermissionEvaluator, RoleAdministration, RoleRegistry, UserPermissionCheck,
};
use super::types::{LoginResponse, UserInfo};

/// Authentication and authorization for the back office
///
/// Wires the JWT handler, role registry, evaluator, and gate together over a
/// pluggable account store. Everything is cheaply cloneable behind `Arc`s.
#[derive(Clone)]
pub struct AuthSystem {
    config: Arc<Config>,
    store: Arc<dyn UserStore>,
    jwt: Arc<JwtHandler>,
    registry: Arc<RoleRegistry>,
    evaluator: Arc<PermissionEvaluator>,
    gate: Arc<AuthorizationGate>,
    admin: Arc<RoleAdministration>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &Config, store: Arc<dyn UserStore>) -> Self {
        info!("Initializing authentication system");

        let config = Arc::new(config.clone());
        let jwt = Arc::new(JwtHandler::new(config.auth()));
        let registry = Arc::new(RoleRegistry::new());
        let evaluator = Arc::new(PermissionEvaluator::new(Arc::clone(&registry)));
        let gate = Arc::new(AuthorizationGate::new(Arc::clone(&evaluator)));
        let admin = Arc::new(RoleAdministration::new(
            Arc::clone(&registry),
            Arc::clone(&gate),
        ));

        info!("Authentication system initialized");

        Self {
            config,
            store,
            jwt,
            registry,
            evaluator,
            gate,
            admin,
        }
    }

    /// Resolve a bearer token into the account it belongs to
    ///
    /// Fails with `Unauthenticated` on a bad token, `NotFound` when the
    /// account is gone, and `Forbidden` when the account is disabled.
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        let claims = self.jwt.verify_token(token)?;

        let user = self
            .store
            .find_user_by_id(claims.sub)
            .await?
            .ok_or_else(|| BackofficeError::not_found("User not found"))?;

        if !user.is_active() {
            warn!("Rejected token for disabled account '{}'", user.username);
            return Err(BackofficeError::forbidden("User account is disabled"));
        }

        debug!("Authenticated '{}' from bearer token", user.username);
        Ok(user)
    }

    /// Resolve an `Authorization` header value into the account it belongs to
    pub async fn authenticate_header(&self, header_value: &str) -> Result<User> {
        let token = JwtHandler::extract_bearer(header_value)
            .ok_or_else(|| BackofficeError::unauthenticated("Missing bearer token"))?;
        self.authenticate(token).await
    }

    /// Log a user in with username and password
    ///
    /// Unknown usernames and wrong passwords fail identically so the error
    /// does not leak which accounts exist.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        info!("User login attempt: {}", username);

        let user = self
            .store
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| BackofficeError::unauthenticated("Invalid username or password"))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(BackofficeError::unauthenticated(
                "Invalid username or password",
            ));
        }

        if !user.is_active() {
            return Err(BackofficeError::forbidden("User account is disabled"));
        }

        let access_token = self.jwt.create_access_token(&user)?;
        self.store.update_last_login(user.id()).await?;

        info!("User logged in successfully: {}", username);

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.expiration(),
            permissions: self.evaluator.permissions_for(&user),
            user: UserInfo::from(&user),
        })
    }

    /// Answer whether the user holds a permission, with the reasoning
    pub fn check_permission(&self, user: &User, permission: Permission) -> UserPermissionCheck {
        let check = self.evaluator.check_permission(user, permission);

        UserPermissionCheck {
            user_id: user.id(),
            permission,
            has_permission: check.granted,
            role: check.role,
            reason: check.denial_reason,
        }
    }

    /// Every permission the user currently holds, in catalog order
    pub fn permissions(&self, user: &User) -> Vec<Permission> {
        self.evaluator.permissions_for(user)
    }

    /// Change a user's password after verifying the old one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        info!("Changing password for user: {}", user_id);

        let user = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| BackofficeError::not_found("User not found"))?;

        if !verify_password(old_password, &user.password_hash)? {
            return Err(BackofficeError::validation("Invalid old password"));
        }

        if new_password.len() < 8 {
            return Err(BackofficeError::validation(
                "New password must be at least 8 characters",
            ));
        }

        let password_hash = hash_password(new_password)?;
        self.store.update_password(user_id, &password_hash).await?;

        info!("Password changed for user: {}", user_id);
        Ok(())
    }

    /// Create the configured bootstrap administrator if it does not exist
    ///
    /// Returns the created account, or `None` when bootstrapping is not
    /// configured or the account is already there. Safe to call on every
    /// startup.
    pub async fn bootstrap_admin(&self) -> Result<Option<User>> {
        let Some(bootstrap) = self.config.access().bootstrap_admin.as_ref() else {
            debug!("No bootstrap administrator configured");
            return Ok(None);
        };

        if self
            .store
            .find_user_by_username(&bootstrap.username)
            .await?
            .is_some()
        {
            debug!(
                "Bootstrap administrator '{}' already exists",
                bootstrap.username
            );
            return Ok(None);
        }

        let password_hash = hash_password(&bootstrap.password)?;
        let user = User::new(
            bootstrap.username.clone(),
            bootstrap.email.clone(),
            bootstrap.display_name.clone(),
            password_hash,
            "admin",
        );

        let created = self.store.create_user(user).await?;
        info!("Bootstrap administrator '{}' created", created.username);
        Ok(Some(created))
    }

    /// JWT handler
    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }

    /// Role registry
    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Permission evaluator
    pub fn evaluator(&self) -> &PermissionEvaluator {
        &self.evaluator
    }

    /// Authorization gate
    pub fn gate(&self) -> &AuthorizationGate {
        &self.gate
    }

    /// Role administration operations
    pub fn role_admin(&self) -> &RoleAdministration {
        &self.admin
    }
}
