//! Integration tests for renderdesk
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod auth_flow_tests;
pub mod role_admin_tests;
