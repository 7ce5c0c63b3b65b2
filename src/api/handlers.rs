//! API Handlers
//!
//! HTTP request handlers for each share-link endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::config::Config;
use crate::error::{Result, ShareError};
use crate::id::{generate_note_id, note_key};
use crate::models::{
    CreateNoteRequest, CreateNoteResponse, GetNoteParams, HealthResponse, NoteResponse,
};
use crate::store::{NoteStore, UpstashStore};

/// Application state shared across all handlers.
///
/// Holds the note store behind the capability trait; `None` means the store
/// credentials were absent at startup. The server still runs in that state
/// and every handler (except the preflight) reports the misconfiguration.
#[derive(Clone)]
pub struct AppState {
    /// Configured note store, if credentials were present
    store: Option<Arc<dyn NoteStore>>,
}

impl AppState {
    /// Creates a new AppState backed by the given store.
    pub fn new(store: impl NoteStore + 'static) -> Self {
        Self {
            store: Some(Arc::new(store)),
        }
    }

    /// Creates an AppState with no store, for the missing-credentials state.
    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP store adapter when both credentials are present.
    pub fn from_config(config: &Config) -> Self {
        match (&config.kv_rest_api_url, &config.kv_rest_api_token) {
            (Some(url), Some(token)) => Self::new(UpstashStore::new(
                url.clone(),
                token.clone(),
                Duration::from_secs(config.store_timeout_secs),
            )),
            _ => Self::unconfigured(),
        }
    }

    /// Returns the store, or the configuration error shown to every request.
    fn store(&self) -> Result<&Arc<dyn NoteStore>> {
        self.store.as_ref().ok_or(ShareError::Unconfigured)
    }
}

/// Handler for POST /share
///
/// Validates the JSON body, generates an identifier, and writes the content
/// to the store with the clamped TTL. The body arrives as raw bytes so that
/// unparsable JSON maps to this service's own 400 body, and the router's
/// body-size limit has already bounded it to 5 MiB.
pub async fn create_note_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateNoteResponse>> {
    let store = state.store()?;

    let req = CreateNoteRequest::from_bytes(&body)?;
    let content = req.content()?;
    let ttl_minutes = req.ttl_minutes();

    let id = generate_note_id();
    store.put(&note_key(&id), content, ttl_minutes * 60).await?;

    info!(%id, ttl_minutes, "share link created");
    Ok(Json(CreateNoteResponse::new(id, ttl_minutes)))
}

/// Handler for GET /share?id=<id>
///
/// Looks the identifier up in the store; a null result means the note never
/// existed or already expired, which reads as 404.
pub async fn get_note_handler(
    State(state): State<AppState>,
    Query(params): Query<GetNoteParams>,
) -> Result<Json<NoteResponse>> {
    let store = state.store()?;
    let id = params.id()?;

    let content = store
        .get(&note_key(id))
        .await?
        .ok_or(ShareError::NotFound)?;

    Ok(Json(NoteResponse::new(id, content)))
}

/// Handler for OPTIONS /share
///
/// Answers 200 with an empty body even when the store is unconfigured, so
/// browser preflights never surface the configuration error.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unsupported methods on /share
///
/// The configuration check runs before the method check, matching the other
/// handlers: an unconfigured server reports 500 for every method except
/// OPTIONS.
pub async fn method_not_allowed_handler(State(state): State<AppState>) -> ShareError {
    match state.store() {
        Ok(_) => ShareError::MethodNotAllowed,
        Err(err) => err,
    }
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use async_trait::async_trait;
    use serde_json::json;

    struct FailingStore;

    #[async_trait]
    impl NoteStore for FailingStore {
        async fn put(&self, _: &str, _: &str, _: u64) -> std::result::Result<(), StoreError> {
            Err(StoreError::Upstream("write refused".to_string()))
        }

        async fn get(&self, _: &str) -> std::result::Result<Option<String>, StoreError> {
            Err(StoreError::Transport("connection reset".to_string()))
        }
    }

    #[tokio::test]
    async fn test_create_and_get_note() {
        let state = AppState::new(MemoryStore::new());

        let body = Bytes::from(r#"{"content":"hello","ttlMinutes":5}"#);
        let created = create_note_handler(State(state.clone()), body)
            .await
            .unwrap();
        assert_eq!(created.ttl_minutes, 5);
        assert_eq!(created.id.len(), 16);

        let params = GetNoteParams {
            id: Some(created.id.clone()),
        };
        let fetched = get_note_handler(State(state), Query(params)).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.content, "hello");
    }

    #[tokio::test]
    async fn test_create_note_missing_content() {
        let state = AppState::new(MemoryStore::new());

        let body = Bytes::from(json!({ "ttlMinutes": 5 }).to_string());
        let result = create_note_handler(State(state), body).await;
        assert!(matches!(result, Err(ShareError::MissingContent)));
    }

    #[tokio::test]
    async fn test_create_note_invalid_json() {
        let state = AppState::new(MemoryStore::new());

        let body = Bytes::from_static(b"not json");
        let result = create_note_handler(State(state), body).await;
        assert!(matches!(result, Err(ShareError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_note_is_not_found() {
        let state = AppState::new(MemoryStore::new());

        let params = GetNoteParams {
            id: Some("0123456789abcdef".to_string()),
        };
        let result = get_note_handler(State(state), Query(params)).await;
        assert!(matches!(result, Err(ShareError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_note_missing_id() {
        let state = AppState::new(MemoryStore::new());

        let result = get_note_handler(State(state), Query(GetNoteParams::default())).await;
        assert!(matches!(result, Err(ShareError::MissingId)));
    }

    #[tokio::test]
    async fn test_unconfigured_state_rejects_both_methods() {
        let state = AppState::unconfigured();

        let body = Bytes::from(r#"{"content":"hello"}"#);
        let result = create_note_handler(State(state.clone()), body).await;
        assert!(matches!(result, Err(ShareError::Unconfigured)));

        let params = GetNoteParams {
            id: Some("0123456789abcdef".to_string()),
        };
        let result = get_note_handler(State(state), Query(params)).await;
        assert!(matches!(result, Err(ShareError::Unconfigured)));
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_store_error() {
        let state = AppState::new(FailingStore);

        let body = Bytes::from(r#"{"content":"hello"}"#);
        let result = create_note_handler(State(state.clone()), body).await;
        assert!(matches!(result, Err(ShareError::Store(_))));

        let params = GetNoteParams {
            id: Some("0123456789abcdef".to_string()),
        };
        let result = get_note_handler(State(state), Query(params)).await;
        assert!(matches!(result, Err(ShareError::Store(_))));
    }

    #[tokio::test]
    async fn test_fallback_is_405_when_configured_500_when_not() {
        let err = method_not_allowed_handler(State(AppState::new(MemoryStore::new()))).await;
        assert!(matches!(err, ShareError::MethodNotAllowed));

        let err = method_not_allowed_handler(State(AppState::unconfigured())).await;
        assert!(matches!(err, ShareError::Unconfigured));
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
