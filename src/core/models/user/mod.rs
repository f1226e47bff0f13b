//! User models for the back office
//!
//! This module defines user-related data structures.

pub mod types;

pub use types::{User, UserStatus};
