//! Upstash-style REST adapter for the note store.
//!
//! The store speaks a command-over-HTTP protocol: a write is a JSON array of
//! command tokens POSTed to the base URL, a read is a GET against
//! `/get/<key>`. Both carry a bearer token and answer with a JSON object
//! whose `result` field holds the outcome (null for a missing or expired
//! key) and whose `error` field, when present, signals a store failure.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{NoteStore, StoreError};

/// HTTP client for an Upstash-compatible REST key-value store.
pub struct UpstashStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
    timeout: Duration,
}

/// Response envelope shared by the command and lookup endpoints.
#[derive(Debug, Deserialize)]
struct CommandResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

impl UpstashStore {
    /// Creates a new adapter for the store at `base_url`.
    ///
    /// `timeout` bounds each outbound call; the original protocol leaves the
    /// transport's default in place, but an unbounded hang would pin the
    /// inbound request too.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: trim_trailing_slash(base_url.into()),
            token: token.into(),
            timeout,
        }
    }

    /// URL used to look up a key.
    fn lookup_url(&self, key: &str) -> String {
        format!("{}/get/{}", self.base_url, urlencoding::encode(key))
    }

    /// Decodes a store response, folding HTTP-level and body-level errors.
    async fn decode_response(response: reqwest::Response) -> Result<Option<Value>, StoreError> {
        let status = response.status();
        let body: CommandResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if let Some(error) = body.error {
            return Err(StoreError::Upstream(error));
        }
        if !status.is_success() {
            return Err(StoreError::Upstream(format!(
                "store responded with status {status}"
            )));
        }
        Ok(body.result)
    }
}

/// Builds the SET command array for a write with expiry.
fn set_command(key: &str, value: &str, ttl_seconds: u64) -> Value {
    json!(["SET", key, value, "EX", ttl_seconds])
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[async_trait]
impl NoteStore for UpstashStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError> {
        debug!(key, ttl_seconds, "writing note to store");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .json(&set_command(key, value, ttl_seconds))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Self::decode_response(response).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        debug!(key, "reading note from store");

        let response = self
            .client
            .get(self.lookup_url(key))
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let result = Self::decode_response(response).await?;
        Ok(result.and_then(|v| v.as_str().map(str::to_string)))
    }
}
