//! The remote todo service as seen by the controllers.
//!
//! `TodoService` is the only seam between the view-state controllers and the
//! outside world. `RemoteTodoService` implements it over HTTP by pairing the
//! stateless `TodoClient` with a host-supplied `Transport`.

use std::future::Future;

use tracing::debug;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{CreateTodo, TodoId, TodoItem, TodoQuery, UpdateStatus};

/// Asynchronous, fallible operations offered by the remote todo service.
///
/// Any `Err` means the operation did not take effect.
pub trait TodoService {
    fn fetch_all(&self, query: &TodoQuery) -> impl Future<Output = Result<Vec<TodoItem>, ApiError>>;

    fn create(&self, input: &CreateTodo) -> impl Future<Output = Result<TodoItem, ApiError>>;

    fn update_status(&self, id: TodoId, input: &UpdateStatus) -> impl Future<Output = Result<TodoItem, ApiError>>;

    fn delete(&self, id: TodoId) -> impl Future<Output = Result<(), ApiError>>;
}

/// `TodoService` backed by the HTTP API.
#[derive(Debug, Clone)]
pub struct RemoteTodoService<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> RemoteTodoService<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }
}

impl<T: Transport> TodoService for RemoteTodoService<T> {
    async fn fetch_all(&self, query: &TodoQuery) -> Result<Vec<TodoItem>, ApiError> {
        let request = self.client.build_fetch_all(query);
        debug!(path = %request.path, "fetching todos");
        let response = self.transport.execute(request).await?;
        self.client.parse_fetch_all(response)
    }

    async fn create(&self, input: &CreateTodo) -> Result<TodoItem, ApiError> {
        let request = self.client.build_create(input)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create(response)
    }

    async fn update_status(&self, id: TodoId, input: &UpdateStatus) -> Result<TodoItem, ApiError> {
        let request = self.client.build_update_status(id, input)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_status(response)
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let request = self.client.build_delete(id);
        let response = self.transport.execute(request).await?;
        self.client.parse_delete(response)
    }
}
