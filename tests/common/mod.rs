//! Common test utilities for renderdesk
//!
//! This module provides shared test infrastructure for all tests:
//! - Account fixtures and factories
//! - A pre-wired authentication system over the in-memory store
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{TestSystem, UserFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let harness = TestSystem::new();
//!     let designer = harness.seed(UserFactory::with_role("designer")).await;
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod system;

// Re-export commonly used items
pub use fixtures::{TEST_PASSWORD, UserFactory};
pub use system::TestSystem;
