//! Stateless request builder and response parser for `/api/todos`.
//!
//! `TodoClient` holds only a `base_url`. Every route has a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes the
//! matching `HttpResponse`; the caller executes the round-trip in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, ErrorBody, MessageBody, Todo, TodoStats, UpdateTodo};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/api/todos{suffix}", self.base_url)
    }

    fn bodiless(&self, method: HttpMethod, suffix: &str) -> HttpRequest {
        HttpRequest {
            method,
            path: self.url(suffix),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        suffix: &str,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.url(suffix),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bodiless(HttpMethod::Get, "")
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.bodiless(HttpMethod::Get, &format!("/{id}"))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "", input)
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/{id}"), input)
    }

    pub fn build_toggle_todo(&self, id: u64) -> HttpRequest {
        self.bodiless(HttpMethod::Patch, &format!("/{id}/toggle"))
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.bodiless(HttpMethod::Delete, &format!("/{id}"))
    }

    pub fn build_stats(&self) -> HttpRequest {
        self.bodiless(HttpMethod::Get, "/stats")
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }

    /// Returns the server's acknowledgement message.
    pub fn parse_toggle_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_json::<MessageBody>(response).map(|m| m.message)
    }

    /// Returns the server's acknowledgement message.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_json::<MessageBody>(response).map(|m| m.message)
    }

    pub fn parse_stats(&self, response: HttpResponse) -> Result<TodoStats, ApiError> {
        parse_json(response)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Every route answers 200 on success. Map anything else to an `ApiError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => match serde_json::from_str::<ErrorBody>(&response.body) {
            Ok(body) => Err(ApiError::Validation(body.error)),
            Err(_) => Err(http_error(response)),
        },
        _ => Err(http_error(response)),
    }
}

fn http_error(response: &HttpResponse) -> ApiError {
    ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8080")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8080/api/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_omits_missing_description() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
            description: None,
            completed: false,
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8080/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk", "completed": false}));
    }

    #[test]
    fn build_update_todo_sends_every_field() {
        let input = UpdateTodo {
            title: "Updated".to_string(),
            description: None,
            completed: true,
        };
        let req = client().build_update_todo(4, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8080/api/todos/4");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Updated", "description": null, "completed": true})
        );
    }

    #[test]
    fn build_toggle_and_stats_paths() {
        let c = client();
        let toggle = c.build_toggle_todo(9);
        assert_eq!(toggle.method, HttpMethod::Patch);
        assert_eq!(toggle.path, "http://localhost:8080/api/todos/9/toggle");

        let stats = c.build_stats();
        assert_eq!(stats.method, HttpMethod::Get);
        assert_eq!(stats.path, "http://localhost:8080/api/todos/stats");
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(2);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8080/api/todos/2");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TodoClient::new("http://localhost:8080/").build_list_todos();
        assert_eq!(req.path, "http://localhost:8080/api/todos");
    }

    #[test]
    fn parse_list_todos_success() {
        let todos = client()
            .parse_list_todos(response(
                200,
                r#"[{"id":1,"title":"Test","description":null,"completed":false}]"#,
            ))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert!(todos[0].description.is_none());
    }

    #[test]
    fn parse_create_todo_validation_error() {
        let err = client()
            .parse_create_todo(response(400, r#"{"error":"title must not be empty"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m == "title must not be empty"));
    }

    #[test]
    fn parse_400_without_error_body_is_http_error() {
        let err = client()
            .parse_create_todo(response(400, "bad"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 400, .. }));
    }

    #[test]
    fn parse_get_todo_not_found() {
        let err = client()
            .parse_get_todo(response(404, r#"{"error":"todo 1 not found"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_unexpected_status() {
        let err = client()
            .parse_stats(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_toggle_returns_message() {
        let msg = client()
            .parse_toggle_todo(response(200, r#"{"message":"status updated"}"#))
            .unwrap();
        assert_eq!(msg, "status updated");
    }

    #[test]
    fn parse_stats_success() {
        let stats = client()
            .parse_stats(response(200, r#"{"total":3,"completed":1,"active":2}"#))
            .unwrap();
        assert_eq!(
            stats,
            TodoStats {
                total: 3,
                completed: 1,
                active: 2,
            }
        );
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let err = client()
            .parse_list_todos(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
