//! # CareMap Shared Library
//!
//! This crate contains the types and data-access logic shared by the CareMap
//! API server and its tests.
//!
//! ## Module Organization
//!
//! - `models`: Database models and CRUD operations
//! - `auth`: Password hashing, JWT tokens, auth context
//! - `db`: Connection pooling and migrations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the CareMap shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
