//! Response DTOs for the share-link API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for creating a share link (POST /share)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteResponse {
    /// The generated note identifier
    pub id: String,
    /// The TTL actually applied, in minutes
    pub ttl_minutes: u64,
}

impl CreateNoteResponse {
    /// Creates a new CreateNoteResponse
    pub fn new(id: impl Into<String>, ttl_minutes: u64) -> Self {
        Self {
            id: id.into(),
            ttl_minutes,
        }
    }
}

/// Response body for looking up a share link (GET /share?id=...)
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    /// The requested identifier
    pub id: String,
    /// The stored content
    pub content: String,
}

impl NoteResponse {
    /// Creates a new NoteResponse
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_note_response_serialize() {
        let resp = CreateNoteResponse::new("abcd1234abcd1234", 5);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains(r#""id":"abcd1234abcd1234""#));
        assert!(json.contains(r#""ttlMinutes":5"#));
    }

    #[test]
    fn test_note_response_serialize() {
        let resp = NoteResponse::new("abcd1234abcd1234", "hello");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("abcd1234abcd1234"));
        assert!(json.contains("hello"));
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
