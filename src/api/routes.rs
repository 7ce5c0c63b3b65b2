//! API Routes
//!
//! Configures the Axum router with the share-link endpoints.

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, MethodFilter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{
    create_note_handler, get_note_handler, health_handler, method_not_allowed_handler,
    preflight_handler, AppState,
};
use crate::error::ShareError;

/// Maximum accepted POST body size in bytes (5 MiB).
///
/// Bounds memory use against unbounded or malicious bodies; axum rejects
/// anything larger before the handler runs.
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /share` - Store content, returns a share identifier
/// - `GET /share?id=<id>` - Retrieve content by identifier
/// - `OPTIONS /share` - CORS preflight, always 200
/// - any other method on `/share` - 405
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: allows any origin/method/header
/// - Response headers: JSON content type and `Cache-Control: no-store`
///   on every response
/// - Body limit: 5 MiB on inbound bodies
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints. GET is registered alone (not via
    // `get()`, which would serve HEAD too) so that HEAD falls through to the
    // method fallback like any other unsupported method.
    Router::new()
        .route(
            "/share",
            post(create_note_handler)
                .on(MethodFilter::GET, get_note_handler)
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(payload_too_large_as_json))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Replaces the body-limit rejection's plain-text response with this
/// service's JSON error body, so the JSON content-type header stays honest
/// on every response.
async fn payload_too_large_as_json(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ShareError::PayloadTooLarge.into_response();
    }
    response
}
