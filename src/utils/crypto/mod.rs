//! Cryptographic utilities for the back office
//!
//! Password hashing and verification for login and account bootstrap.

pub mod password;

pub use password::{hash_password, verify_password};
