//! Error types for the user service
//!
//! Provides the storage error taxonomy and its translation into HTTP
//! responses, using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use crate::models::ErrorResponse;

// == Storage Error Enum ==
/// Failures raised by the storage abstraction.
///
/// Variants are matched by kind at the transport boundary; the payload is
/// diagnostic detail only.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No entity is stored under the given identity
    #[error("no entity found for id {0}")]
    EntityNotFound(Uuid),

    /// Failed to serialize an entity on write
    #[error("failed to serialize entity: {0}")]
    MarshalingEntity(String),

    /// Failed to deserialize an entity on read
    #[error("failed to deserialize entity: {0}")]
    UnmarshalingEntity(String),

    /// Bulk fetch against the backend failed
    #[error("failed to fetch records: {0}")]
    GettingRecords(String),

    /// Backend unreachable at construction time; fatal, never retried
    #[error("could not connect to the storage backend: {0}")]
    ConnectionFailed(String),

    /// Any other client-level backend failure
    #[error("storage backend failure: {0}")]
    Backend(String),
}

// == API Error Enum ==
/// Request-level failures surfaced to HTTP clients.
///
/// Validation errors are produced at the transport boundary and never reach
/// the service layer; storage errors pass through the service layer
/// unchanged and are translated here.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path parameter is not a well-formed identifier
    #[error("invalid uuid: {0}")]
    InvalidId(String),

    /// Request body failed field validation
    #[error("invalid user body: {0}")]
    Validation(String),

    /// Storage-layer failure, translated by kind
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");

        let (status, code, description) = match &self {
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "BadRequest", "invalid uuid"),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "BadRequest", msg.as_str()),
            ApiError::Storage(err) => match err {
                StorageError::EntityNotFound(_) => (
                    StatusCode::NOT_FOUND,
                    "NotFound",
                    "cannot find entity with this id",
                ),
                StorageError::UnmarshalingEntity(_) | StorageError::MarshalingEntity(_) => {
                    (StatusCode::BAD_REQUEST, "BadRequest", "invalid body")
                }
                StorageError::GettingRecords(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "cannot get records from storage",
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "internal server error",
                ),
            },
        };

        let body = Json(ErrorResponse::new(status.as_u16(), code, description));

        (status, body).into_response()
    }
}

// == Result Type Aliases ==
/// Convenience Result type for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Convenience Result type for HTTP handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
