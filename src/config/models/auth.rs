//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT expiration in seconds
    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration: u64,
    /// Issuer claim stamped into every token
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: generate_secure_jwt_secret(),
            jwt_expiration: default_jwt_expiration(),
            issuer: default_issuer(),
        }
    }
}

impl AuthConfig {
    /// Merge auth configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.jwt_secret.is_empty() && other.jwt_secret != "your-secret-key" {
            self.jwt_secret = other.jwt_secret;
        }
        if other.jwt_expiration != default_jwt_expiration() {
            self.jwt_expiration = other.jwt_expiration;
        }
        if other.issuer != default_issuer() {
            self.issuer = other.issuer;
        }
        self
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT secret must be at least 32 characters long for security".to_string());
        }

        if self.jwt_secret == "your-secret-key" || self.jwt_secret == "change-me" {
            return Err(
                "JWT secret must not use default values. Please generate a secure random secret."
                    .to_string(),
            );
        }

        if self.jwt_secret.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(
                "JWT secret should contain mixed case letters, numbers, and special characters"
                    .to_string(),
            );
        }

        if self.jwt_expiration < 300 {
            return Err("JWT expiration should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.jwt_expiration > 86400 * 30 {
            return Err(
                "JWT expiration should not exceed 30 days for security reasons".to_string(),
            );
        }

        if self.issuer.is_empty() {
            return Err("JWT issuer cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Access-control configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccessConfig {
    /// Administrator account seeded on first start
    #[serde(default)]
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}

impl AccessConfig {
    /// Merge access configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.bootstrap_admin.is_some() {
            self.bootstrap_admin = other.bootstrap_admin;
        }
        self
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(admin) = &self.bootstrap_admin {
            if admin.username.is_empty() {
                return Err("Bootstrap admin username cannot be empty".to_string());
            }
            if admin.password.len() < 8 {
                return Err(
                    "Bootstrap admin password must be at least 8 characters long".to_string(),
                );
            }
            if !admin.email.contains('@') {
                return Err(format!(
                    "Bootstrap admin email is not valid: {}",
                    admin.email
                ));
            }
        }
        Ok(())
    }
}

/// Administrator account seeded when the user store is empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdminConfig {
    /// Login username
    #[serde(default = "default_admin_username")]
    pub username: String,
    /// Contact email
    #[serde(default = "default_admin_email")]
    pub email: String,
    /// Display name shown in the back office
    #[serde(default = "default_admin_display_name")]
    pub display_name: String,
    /// Initial password, expected to be rotated after first login
    pub password: String,
}

/// Generate a secure random JWT secret
fn generate_secure_jwt_secret() -> String {
    // 64-character secure random string
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}

/// Warn about insecure configuration in development
pub fn warn_insecure_config(config: &AccessConfig) {
    if let Some(admin) = &config.bootstrap_admin {
        if admin.password == "admin123" {
            warn!(
                "Bootstrap admin uses the well-known default password. Change it before exposing the back office."
            );
        }
    }
}
