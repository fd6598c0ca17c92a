//! Error taxonomy for the REST API.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl maps
//! each variant to a status code and an `{"error": "..."}` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Request-local failures surfaced by the query/mutation services
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or empty required field (400)
    #[error("{0}")]
    InvalidInput(String),

    /// A referenced id does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Delete blocked by a referencing row, or duplicate registration (409)
    #[error("{0}")]
    Conflict(String),

    /// Underlying persistence failure (500, logged, message not leaked)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{} {} not found", resource, id))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body (JSON)
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server-side failures with full detail; clients get a generic
        // message so storage internals never leak into responses.
        let message = if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let err = ApiError::invalid_input("description is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "description is required");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::not_found("Event type", 42);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Event type 42 not found");
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::conflict("Event type is in use");
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_errors_map_to_500() {
        let err = ApiError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
