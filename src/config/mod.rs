//! Configuration management for the back office
//!
//! This module handles loading, validation, and management of all configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{BackofficeError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the back office
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Back-office configuration
    pub backoffice: BackofficeConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BackofficeError::Config(format!("Failed to read config file: {}", e)))?;

        let backoffice: BackofficeConfig = serde_yaml::from_str(&content)
            .map_err(|e| BackofficeError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { backoffice };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let backoffice = BackofficeConfig::from_env()?;
        let config = Self { backoffice };

        config.validate()?;
        Ok(config)
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.backoffice.auth
    }

    /// Get access-control configuration
    pub fn access(&self) -> &AccessConfig {
        &self.backoffice.access
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.backoffice
            .auth
            .validate()
            .map_err(|e| BackofficeError::Config(format!("Auth config error: {}", e)))?;

        self.backoffice
            .access
            .validate()
            .map_err(|e| BackofficeError::Config(format!("Access config error: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.backoffice.access);

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.backoffice = self.backoffice.merge(other.backoffice);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.backoffice).map_err(|e| {
            BackofficeError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
auth:
  jwt_secret: "Back-Office-Test-Secret-0123456789-0123456789"
  jwt_expiration: 3600

access:
  bootstrap_admin:
    username: "admin"
    email: "admin@nflab.com"
    display_name: "System Administrator"
    password: "rotate-me-soon"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.auth().jwt_expiration, 3600);
        assert_eq!(config.auth().issuer, "renderdesk");
        let admin = config.access().bootstrap_admin.as_ref().unwrap();
        assert_eq!(admin.username, "admin");
    }

    #[tokio::test]
    async fn test_config_from_file_rejects_weak_secret() {
        let config_content = r#"
auth:
  jwt_secret: "short"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let result = Config::from_file(temp_file.path()).await;
        assert!(matches!(result, Err(BackofficeError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_expiration() {
        let mut config = Config::default();
        config.backoffice.auth.jwt_expiration = 60;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_weak_bootstrap_password() {
        let mut config = Config::default();
        config.backoffice.access.bootstrap_admin = Some(BootstrapAdminConfig {
            username: "admin".to_string(),
            email: "admin@nflab.com".to_string(),
            display_name: "System Administrator".to_string(),
            password: "short".to_string(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_merge_prefers_other() {
        let base = Config::default();
        let mut other = Config::default();
        other.backoffice.auth.jwt_expiration = 7200;

        let merged = base.merge(other);
        assert_eq!(merged.auth().jwt_expiration, 7200);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("jwt_expiration"));
    }
}
