//! Role-based access control for the back office
//!
//! The registry holds the mutable role-to-permission configuration, the
//! evaluator answers permission checks against it, and the administration
//! type exposes the operator-facing management operations.

mod admin;
mod catalog;
mod evaluator;
mod matrix;
mod registry;
mod types;

pub use admin::RoleAdministration;
pub use catalog::{PERMISSION_CATALOG, descriptor};
pub use evaluator::PermissionEvaluator;
pub use registry::RoleRegistry;
pub use types::{
    Permission, PermissionCategory, PermissionCheck, PermissionDescriptor, PermissionMatrix,
    RoleId, RoleInfo, RolePermissions, RoleSummary, UserPermissionCheck,
};
