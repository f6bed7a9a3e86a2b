//! In-memory stand-in for the remote todo service.
//!
//! Todos are kept in a `Vec` so listings come back in insertion order.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Status::Pending),
            "completed" => Some(Status::Completed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub body: String,
    pub status: Status,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub body: String,
}

#[derive(Deserialize)]
pub struct UpdateStatus {
    pub status: Status,
}

/// `?statuses=pending,completed`; absent or empty means every status.
#[derive(Deserialize)]
pub struct ListParams {
    pub statuses: Option<String>,
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", delete(delete_todo))
        .route("/todos/{id}/status", put(update_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn parse_statuses(raw: Option<&str>) -> Result<Vec<Status>, StatusCode> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(|s| Status::parse(s).ok_or(StatusCode::BAD_REQUEST))
        .collect()
}

async fn list_todos(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Todo>>, StatusCode> {
    let statuses = parse_statuses(params.statuses.as_deref())?;
    let todos = db.read().await;
    let matching = todos
        .iter()
        .filter(|todo| statuses.is_empty() || statuses.contains(&todo.status))
        .cloned()
        .collect();
    Ok(Json(matching))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    if input.body.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let todo = Todo {
        id: Uuid::new_v4(),
        body: input.body,
        status: Status::Pending,
    };
    debug!(id = %todo.id, "created");
    db.write().await.push(todo.clone());
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_status(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateStatus>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.iter_mut().find(|t| t.id == id).ok_or(StatusCode::NOT_FOUND)?;
    todo.status = input.status;
    debug!(%id, status = ?todo.status, "status updated");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    let index = todos.iter().position(|t| t.id == id).ok_or(StatusCode::NOT_FOUND)?;
    todos.remove(index);
    debug!(%id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: Uuid::nil(),
            body: "Test".to_string(),
            status: Status::Pending,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["body"], "Test");
        assert_eq!(json["status"], "pending");
    }

    #[test]
    fn create_todo_rejects_missing_body() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"status":"pending"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_status_rejects_unknown_status() {
        let result: Result<UpdateStatus, _> = serde_json::from_str(r#"{"status":"done"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn parse_statuses_accepts_comma_list() {
        assert_eq!(
            parse_statuses(Some("pending,completed")).unwrap(),
            vec![Status::Pending, Status::Completed]
        );
        assert!(parse_statuses(None).unwrap().is_empty());
        assert!(parse_statuses(Some("")).unwrap().is_empty());
    }

    #[test]
    fn parse_statuses_rejects_unknown() {
        assert_eq!(parse_statuses(Some("pending,done")).unwrap_err(), StatusCode::BAD_REQUEST);
    }
}
