//! Error types for the share-link server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Operator-facing message returned while the store credentials are missing.
pub const UNCONFIGURED_MESSAGE: &str =
    "Key-value store is not configured. Set KV_REST_API_URL and KV_REST_API_TOKEN.";

// == Share Error Enum ==
/// Unified error type for the share-link server.
#[derive(Error, Debug)]
pub enum ShareError {
    /// Request body could not be parsed as JSON
    #[error("Invalid JSON in request body: {0}")]
    InvalidJson(String),

    /// Required `content` field missing, not a string, or blank
    #[error("Field 'content' is required and must be a non-empty string")]
    MissingContent,

    /// Required `id` query parameter missing or empty
    #[error("Query parameter 'id' is required")]
    MissingId,

    /// No note stored under the requested identifier (or it expired)
    #[error("Share link not found or expired")]
    NotFound,

    /// HTTP method not supported on this endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body exceeded the size limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Store credentials missing from the environment
    #[error("{}", UNCONFIGURED_MESSAGE)]
    Unconfigured,

    /// External key-value store failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ShareError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ShareError::InvalidJson(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ShareError::MissingContent => (StatusCode::BAD_REQUEST, self.to_string()),
            ShareError::MissingId => (StatusCode::BAD_REQUEST, self.to_string()),
            ShareError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ShareError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, self.to_string()),
            ShareError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            ShareError::Unconfigured => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            // Upstream detail stays server-side; the client gets a generic body.
            ShareError::Store(err) => {
                error!(error = %err, "store call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the share-link server.
pub type Result<T> = std::result::Result<T, ShareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        let resp = ShareError::InvalidJson("oops".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ShareError::MissingContent.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ShareError::MissingId.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = ShareError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_method_not_allowed_maps_to_405() {
        let resp = ShareError::MethodNotAllowed.into_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_payload_too_large_maps_to_413() {
        let resp = ShareError::PayloadTooLarge.into_response();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_server_errors_map_to_500() {
        let resp = ShareError::Unconfigured.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp =
            ShareError::Store(StoreError::Upstream("boom".to_string())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
