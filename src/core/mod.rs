//! Core functionality for the back office
//!
//! This module contains the core data structures shared across subsystems.

pub mod models;

pub use models::{Metadata, User, UserStatus};
