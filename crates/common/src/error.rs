//! Common error types and handling for Record Shop

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db::RepositoryError;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Error vocabulary shared by the service and HTTP layers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed client input (bad id, bad body)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The store failed to carry out an operation
    #[error(transparent)]
    Storage(RepositoryError),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Error::NotFound(err.to_string()),
            RepositoryError::Store { .. } => Error::Storage(err),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors with full context
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Internal server error");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
