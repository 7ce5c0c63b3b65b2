//! Store Module
//!
//! Capability seam over the external key-value store. The server only needs
//! two operations: write a value with an expiry, and read a value back. The
//! trait keeps request handling independent of the store vendor's wire
//! protocol and lets tests swap in an in-memory adapter.

mod memory;
mod upstash;

use async_trait::async_trait;
use thiserror::Error;

pub use memory::MemoryStore;
pub use upstash::UpstashStore;

// == Store Error Enum ==
/// Failures talking to the external key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Request never completed (connection refused, timeout, bad response body)
    #[error("store request failed: {0}")]
    Transport(String),

    /// Store answered with a non-success status or an explicit error field
    #[error("store returned an error: {0}")]
    Upstream(String),
}

// == Note Store Trait ==
/// Set-with-expiry / get-by-key capability of the external store.
///
/// `get` returning `Ok(None)` means the key is absent or expired; it is not
/// a store failure.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Stores `value` under `key`, expiring after `ttl_seconds`.
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError>;

    /// Looks up `key`, returning the stored value if present and unexpired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
}
