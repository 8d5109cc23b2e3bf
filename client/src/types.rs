//! DTOs for the todo API.
//!
//! These mirror the server's wire format but are declared independently so
//! the client does not pull in Axum.

use serde::{Deserialize, Serialize};

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Payload for creating a todo. `description` is omitted when `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Payload for replacing a todo. Every field is sent, `description` as
/// `null` when `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Aggregate counts from `GET /api/todos/stats`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoStats {
    pub total: u64,
    pub completed: u64,
    pub active: u64,
}

/// `{"message": ...}` acknowledgement.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

/// `{"error": ...}` failure body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
