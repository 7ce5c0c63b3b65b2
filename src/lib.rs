//! Share Link - A minimal paste/share-link service
//!
//! Stores posted text under a short random identifier in an external HTTP
//! key-value store and serves it back until the TTL expires.

pub mod api;
pub mod config;
pub mod error;
pub mod id;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
