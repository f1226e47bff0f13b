//! Configuration data models
//!
//! This module defines all configuration structures used throughout the back office.

pub mod auth;
pub mod backoffice;

// Re-export all configuration types
pub use auth::*;
pub use backoffice::*;

/// Default JWT expiration in seconds
pub fn default_jwt_expiration() -> u64 {
    86400 // 24 hours
}

/// Default issuer claim
pub fn default_issuer() -> String {
    "renderdesk".to_string()
}

/// Default bootstrap admin username
pub fn default_admin_username() -> String {
    "admin".to_string()
}

/// Default bootstrap admin email
pub fn default_admin_email() -> String {
    "admin@nflab.com".to_string()
}

/// Default bootstrap admin display name
pub fn default_admin_display_name() -> String {
    "System Administrator".to_string()
}
