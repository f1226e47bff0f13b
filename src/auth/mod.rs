//! Authentication and authorization for the back office
//!
//! Bearer tokens are verified by the JWT handler, accounts come from the
//! pluggable user store, and every permission decision goes through the RBAC
//! evaluator. [`AuthSystem`] wires the pieces together.

pub mod gate;
pub mod jwt;
pub mod rbac;
mod system;
mod types;

pub use gate::AuthorizationGate;
pub use system::AuthSystem;
pub use types::{LoginResponse, UserInfo};
