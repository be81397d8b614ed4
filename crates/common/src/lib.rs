//! Shared configuration, error handling, and extractors for Record Shop
//!
//! This crate provides common functionality used across the Record Shop workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Storage and repository error types
//! - Request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, DatabaseConfig};
pub use db::{RepositoryError, StoreError};
pub use error::{Error, Result};
pub use extractors::{PathId, ValidatedJson};
