//! Error types for the todo API client.
//!
//! `NotFound` and `Validation` get dedicated variants because callers act
//! on them directly. Any other unexpected status lands in `HttpError` with
//! the raw status code and body.

/// Errors returned by `TodoClient` methods.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server rejected the payload with 400 and an error message.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Any other non-200 status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}
