//! Main back-office configuration

use super::*;
use crate::utils::error::BackofficeError;
use serde::{Deserialize, Serialize};

/// Main back-office configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackofficeConfig {
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Access-control configuration
    #[serde(default)]
    pub access: AccessConfig,
}

impl BackofficeConfig {
    /// Build a configuration from environment variables, falling back to defaults
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut auth = AuthConfig::default();

        if let Ok(secret) = std::env::var("RENDERDESK_JWT_SECRET") {
            auth.jwt_secret = secret;
        }
        if let Ok(expiration) = std::env::var("RENDERDESK_JWT_EXPIRATION") {
            auth.jwt_expiration = expiration.parse().map_err(|e| {
                BackofficeError::Config(format!("Invalid RENDERDESK_JWT_EXPIRATION: {}", e))
            })?;
        }
        if let Ok(issuer) = std::env::var("RENDERDESK_JWT_ISSUER") {
            auth.issuer = issuer;
        }

        Ok(Self {
            auth,
            access: AccessConfig::default(),
        })
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.auth = self.auth.merge(other.auth);
        self.access = self.access.merge(other.access);
        self
    }
}
