//! Synchronous client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the HTTP round-trip, so the
//! client stays deterministic and needs no async runtime.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Each route is split into `build_*` (produces the request) and
//!   `parse_*` (consumes the response), keeping the I/O boundary explicit.
//! - DTOs are declared here independently of the server crate; the
//!   integration test catches schema drift between the two.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateTodo, Todo, TodoStats, UpdateTodo};
