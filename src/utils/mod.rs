//! Utility modules for the back office
//!
//! ## Module Organization
//!
//! - **crypto**: Password hashing and verification
//! - **error**: Error handling

pub mod crypto;
pub mod error;

pub use error::{BackofficeError, Result};
