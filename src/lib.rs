//! # RenderDesk
//!
//! Authentication and role-based authorization for the back office of an
//! architectural rendering studio. Staff sign in with username and password,
//! carry JWT bearer tokens, and every privileged operation is decided against
//! a central role-to-permission registry.
//!
//! ## Features
//!
//! - **Bearer Authentication**: Signed JWT access tokens resolved back to
//!   accounts on every request
//! - **Fixed Role Set**: Six studio roles from administrator down to viewer,
//!   each with a built-in default permission set
//! - **Editable Assignments**: Role permission sets can be replaced at
//!   runtime through the administration interface
//! - **Administrator Override**: Admin accounts pass every check regardless
//!   of the configured sets
//! - **Permission Matrix**: One call renders the full role-to-permission
//!   mapping for management consoles
//! - **Pluggable Accounts**: Storage sits behind a small trait with an
//!   in-memory implementation included
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use renderdesk::{AuthSystem, Config, MemoryUserStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/backoffice.yaml").await?;
//!     let system = AuthSystem::new(&config, Arc::new(MemoryUserStore::new()));
//!     system.bootstrap_admin().await?;
//!
//!     let login = system.login("admin", "rotate-me-soon").await?;
//!     let user = system.authenticate(&login.access_token).await?;
//!     println!("{} holds {} permissions", user.username, login.permissions.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Permission Checks
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use renderdesk::{Permission, PermissionEvaluator, RoleRegistry, User};
//!
//! let registry = Arc::new(RoleRegistry::new());
//! let evaluator = PermissionEvaluator::new(registry);
//!
//! let designer = User::new("zhangwei", "zhangwei@nflab.com", "Zhang Wei", "hash", "designer");
//! assert!(evaluator.has_permission(&designer, Permission::FileGeneratePdf));
//! assert!(!evaluator.has_permission(&designer, Permission::FinanceRead));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    PERMISSION_CATALOG, Permission, PermissionCategory, PermissionCheck, PermissionDescriptor,
    PermissionEvaluator, PermissionMatrix, RoleAdministration, RoleId, RolePermissions,
    RoleRegistry, UserPermissionCheck,
};
pub use auth::{AuthSystem, AuthorizationGate, LoginResponse, UserInfo};
pub use config::Config;
pub use core::models::{User, UserStatus};
pub use storage::{MemoryUserStore, UserStore};
pub use utils::error::{BackofficeError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
