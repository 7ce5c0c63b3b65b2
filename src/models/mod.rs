//! Request and Response models for the share-link API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CreateNoteRequest, GetNoteParams};
pub use responses::{CreateNoteResponse, ErrorResponse, HealthResponse, NoteResponse};
