// Request-level error taxonomy and its wire representation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors a request can surface to the client. All are request-local; none
/// terminate the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `game` identifier failed validation.
    #[error("invalid game")]
    InvalidGameId,
    /// The requested static path does not exist or escapes the games directory.
    #[error("not found")]
    NotFound,
    /// The counter store could not be read or written. Not retried; the next
    /// request may succeed once storage recovers.
    #[error("storage unavailable")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidGameId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(e) = &self {
            tracing::error!("database error: {e}");
        }
        let body = Json(json!({ "ok": false, "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_game_id_is_bad_request() {
        let response = ApiError::InvalidGameId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_is_500() {
        let response = ApiError::Storage(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::InvalidGameId.to_string(), "invalid game");
        assert_eq!(ApiError::NotFound.to_string(), "not found");
        assert_eq!(
            ApiError::Storage(sqlx::Error::PoolClosed).to_string(),
            "storage unavailable"
        );
    }
}
