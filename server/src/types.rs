//! Wire types for the todo API.
//!
//! `TodoItem` and `TodoStats` are both stored and returned as-is. The request
//! payloads default every field and keep `title` optional, so a missing or
//! `null` title reaches validation instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// A single todo record. `description` serializes as `null` when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Body of `POST /api/todos`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Body of `PUT /api/todos/{id}`. Replaces every field, so omitted ones are
/// reset to their defaults rather than left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Aggregate counts. `total == completed + active` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    pub total: u64,
    pub completed: u64,
    pub active: u64,
}

/// `{"message": ...}` acknowledgement for toggle and delete.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}
