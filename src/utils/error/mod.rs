//! Error handling for the back office
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

pub use types::{BackofficeError, Result};
