//! Shared database types for Record Shop
//!
//! `StoreError` is what a persistence adapter reports; `RepositoryError` is
//! what an entity repository reports after attaching its own context.

use thiserror::Error;

/// Failure reported by a persistence adapter
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Repository-level error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("failed to {operation} {entity}: {source}")]
    Store {
        operation: &'static str,
        entity: &'static str,
        #[source]
        source: StoreError,
    },
}

impl RepositoryError {
    /// Wrap an adapter failure with the operation and entity it happened on
    pub fn store(operation: &'static str, entity: &'static str, source: StoreError) -> Self {
        RepositoryError::Store {
            operation,
            entity,
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}
