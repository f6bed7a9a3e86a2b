//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each remote operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, TodoId, TodoItem, TodoQuery, UpdateStatus};

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

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_fetch_all(&self, query: &TodoQuery) -> HttpRequest {
        let path = if query.statuses.is_empty() {
            format!("{}/todos", self.base_url)
        } else {
            let statuses: Vec<&str> = query.statuses.iter().map(|s| s.as_str()).collect();
            format!("{}/todos?statuses={}", self.base_url, statuses.join(","))
        };
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_status(&self, id: TodoId, input: &UpdateStatus) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/todos/{id}/status", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_fetch_all(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_status(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoStatus;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn nil_id() -> TodoId {
        "00000000-0000-0000-0000-000000000000".parse().unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_fetch_all_encodes_statuses() {
        let req = client().build_fetch_all(&TodoQuery::everything());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos?statuses=pending,completed");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_fetch_all_without_statuses_omits_query() {
        let req = client().build_fetch_all(&TodoQuery { statuses: Vec::new() });
        assert_eq!(req.path, "http://localhost:3000/todos");
    }

    #[test]
    fn build_create_produces_json_body() {
        let input = CreateTodo {
            body: "Buy milk".to_string(),
        };
        let req = client().build_create(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"body": "Buy milk"}));
    }

    #[test]
    fn build_update_status_targets_status_resource() {
        let input = UpdateStatus {
            status: TodoStatus::Completed,
        };
        let req = client().build_update_status(nil_id(), &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(
            req.path,
            "http://localhost:3000/todos/00000000-0000-0000-0000-000000000000/status"
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["status"], "completed");
    }

    #[test]
    fn build_delete_has_no_body() {
        let req = client().build_delete(nil_id());
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.path,
            "http://localhost:3000/todos/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_fetch_all_keeps_service_order() {
        let body = r#"[
            {"id":"00000000-0000-0000-0000-000000000002","body":"second","status":"completed"},
            {"id":"00000000-0000-0000-0000-000000000001","body":"first","status":"pending"}
        ]"#;
        let todos = client().parse_fetch_all(response(200, body)).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].body, "second");
        assert_eq!(todos[0].status, TodoStatus::Completed);
        assert_eq!(todos[1].body, "first");
    }

    #[test]
    fn parse_fetch_all_bad_json() {
        let err = client().parse_fetch_all(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_create_success() {
        let body = r#"{"id":"00000000-0000-0000-0000-000000000001","body":"New","status":"pending"}"#;
        let todo = client().parse_create(response(201, body)).unwrap();
        assert_eq!(todo.body, "New");
        assert_eq!(todo.status, TodoStatus::Pending);
    }

    #[test]
    fn parse_create_wrong_status() {
        let err = client().parse_create(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_status_not_found() {
        let err = client().parse_update_status(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_success_and_not_found() {
        assert!(client().parse_delete(response(204, "")).is_ok());
        let err = client().parse_delete(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_delete(nil_id());
        assert!(req.path.starts_with("http://localhost:3000/todos/"));
    }
}
