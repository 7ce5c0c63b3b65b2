//! API Module
//!
//! HTTP handlers and routing for the share-link REST API.
//!
//! # Endpoints
//! - `POST /share` - Store content, returns a share identifier
//! - `GET /share?id=<id>` - Retrieve content by identifier
//! - `OPTIONS /share` - CORS preflight
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, MAX_BODY_BYTES};
