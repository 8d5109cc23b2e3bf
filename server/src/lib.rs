//! In-memory todo service over HTTP.
//!
//! # Design
//! A [`TodoStore`] is created by the caller and handed to [`app`], which
//! shares it with every handler as `Arc` state. Handlers validate input
//! shape, call exactly one store operation, and turn the outcome into a JSON
//! response. Failures are always [`ApiError`]s rendered as `{"error": ...}`.

pub mod config;
pub mod error;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{Method, Uri},
    routing::{get, patch},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ErrorBody, StoreError};
pub use store::TodoStore;
pub use types::{CreateTodo, MessageBody, TodoItem, TodoStats, UpdateTodo};

type Db = Arc<TodoStore>;

pub fn app(store: Db) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/stats", get(stats))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/todos/{id}/toggle", patch(toggle_todo))
        .fallback(no_route)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(store)
        .layer(TraceLayer::new_for_http())
}

/// Serve a fresh, empty store on `listener` until the task is dropped.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app(Arc::new(TodoStore::new()))).await
}

/// Title as sent by the client, with `null`, missing and blank all rejected.
fn require_title(title: Option<String>) -> Result<String, ApiError> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title),
        _ => Err(StoreError::EmptyTitle.into()),
    }
}

fn message(text: &str) -> Json<MessageBody> {
    Json(MessageBody {
        message: text.to_string(),
    })
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<TodoItem>> {
    Json(db.list())
}

async fn create_todo(
    State(db): State<Db>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Json(input) = input?;
    let title = require_title(input.title)?;
    let todo = db.add(title, input.description, input.completed)?;
    tracing::info!(id = todo.id, "created todo");
    Ok(Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Path(id) = id?;
    db.get(id).map(Json).ok_or(ApiError::NotFound(id))
}

async fn update_todo(
    State(db): State<Db>,
    id: Result<Path<u64>, PathRejection>,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<TodoItem>, ApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    let title = require_title(input.title)?;
    let todo = db
        .update(id, title, input.description, input.completed)
        .ok_or(ApiError::NotFound(id))?;
    tracing::info!(id, "updated todo");
    Ok(Json(todo))
}

async fn toggle_todo(
    State(db): State<Db>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(id) = id?;
    if db.toggle(id) {
        tracing::info!(id, "toggled todo");
        Ok(message("status updated"))
    } else {
        Err(ApiError::NotFound(id))
    }
}

async fn delete_todo(
    State(db): State<Db>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(id) = id?;
    if db.delete(id) {
        tracing::info!(id, "deleted todo");
        Ok(message("todo deleted"))
    } else {
        Err(ApiError::NotFound(id))
    }
}

async fn stats(State(db): State<Db>) -> Json<TodoStats> {
    Json(db.counts())
}

async fn no_route(method: Method, uri: Uri) -> ApiError {
    ApiError::NoRoute(format!("{method} {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{method} {}", uri.path()))
}
