//! Request DTOs for the share-link API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

use crate::config::{DEFAULT_TTL_MINUTES, MAX_TTL_MINUTES, MIN_TTL_MINUTES};
use crate::error::{Result, ShareError};

/// Request body for creating a share link (POST /share)
///
/// # Fields
/// - `content`: The text to store; must be a string with a non-blank trimmed
///   form. Stored verbatim (not trimmed).
/// - `ttlMinutes`: Optional lifetime in minutes. Numbers and numeric strings
///   are accepted; anything else falls back to the default of 60. The
///   resolved value is clamped to [1, 10080].
///
/// Both fields are held as raw JSON values so that a wrong type surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    /// The text content to share
    #[serde(default)]
    pub content: Option<Value>,
    /// Requested lifetime in minutes
    #[serde(default)]
    pub ttl_minutes: Option<Value>,
}

impl CreateNoteRequest {
    /// Parses a request from raw body bytes.
    ///
    /// An empty body parses as an empty object, so the caller sees a
    /// missing-content error rather than a JSON error.
    pub fn from_bytes(body: &[u8]) -> Result<Self> {
        if body.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ShareError::InvalidJson(e.to_string()))
    }

    /// Returns the content string, verbatim, after validating it.
    pub fn content(&self) -> Result<&str> {
        match self.content.as_ref().and_then(Value::as_str) {
            Some(s) if !s.trim().is_empty() => Ok(s),
            _ => Err(ShareError::MissingContent),
        }
    }

    /// Resolves the requested TTL to minutes.
    ///
    /// Absent or non-numeric values fall back to the default; numeric values
    /// (including numeric strings) are clamped to the allowed range, so a
    /// requested 0 becomes 1 rather than the default.
    pub fn ttl_minutes(&self) -> u64 {
        let requested = self
            .ttl_minutes
            .as_ref()
            .and_then(numeric_minutes)
            .unwrap_or(DEFAULT_TTL_MINUTES as f64);

        if requested < MIN_TTL_MINUTES as f64 {
            MIN_TTL_MINUTES
        } else if requested > MAX_TTL_MINUTES as f64 {
            MAX_TTL_MINUTES
        } else {
            requested as u64
        }
    }
}

/// Interprets a JSON value as a finite number of minutes.
fn numeric_minutes(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Query parameters for looking up a share link (GET /share)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetNoteParams {
    /// The note identifier to look up
    #[serde(default)]
    pub id: Option<String>,
}

impl GetNoteParams {
    /// Returns the identifier, rejecting an absent or empty parameter.
    pub fn id(&self) -> Result<&str> {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ShareError::MissingId),
        }
    }
}
