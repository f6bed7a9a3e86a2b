//! In-memory `TodoService` used by the controller tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use uuid::Uuid;

use crate::error::ApiError;
use crate::service::TodoService;
use crate::types::{CreateTodo, TodoId, TodoItem, TodoQuery, TodoStatus, UpdateStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchAll,
    Create(String),
    UpdateStatus(TodoId, TodoStatus),
    Delete(TodoId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    FetchAll,
    Create,
    UpdateStatus,
    Delete,
}

/// Records every call and answers from a `Vec` kept in insertion order.
#[derive(Debug, Default)]
pub struct FakeService {
    items: RefCell<Vec<TodoItem>>,
    calls: RefCell<Vec<Call>>,
    failing: RefCell<HashSet<Op>>,
    next_id: Cell<u128>,
}

impl FakeService {
    pub fn with_items(items: &[(&str, TodoStatus)]) -> Self {
        let service = Self::default();
        for (body, status) in items {
            let id = service.mint_id();
            service.items.borrow_mut().push(TodoItem {
                id,
                body: body.to_string(),
                status: *status,
            });
        }
        service
    }

    pub fn fail(&self, op: Op) {
        self.failing.borrow_mut().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.borrow_mut().remove(&op);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.items.borrow().clone()
    }

    pub fn id_of(&self, body: &str) -> TodoId {
        self.items
            .borrow()
            .iter()
            .find(|item| item.body == body)
            .map(|item| item.id)
            .unwrap_or_else(|| panic!("no todo with body {body:?}"))
    }

    fn mint_id(&self) -> TodoId {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        TodoId::from_uuid(Uuid::from_u128(n))
    }

    fn check(&self, op: Op, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&op) {
            return Err(ApiError::HttpError {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl TodoService for FakeService {
    async fn fetch_all(&self, query: &TodoQuery) -> Result<Vec<TodoItem>, ApiError> {
        self.check(Op::FetchAll, Call::FetchAll)?;
        Ok(self
            .items
            .borrow()
            .iter()
            .filter(|item| query.statuses.is_empty() || query.statuses.contains(&item.status))
            .cloned()
            .collect())
    }

    async fn create(&self, input: &CreateTodo) -> Result<TodoItem, ApiError> {
        self.check(Op::Create, Call::Create(input.body.clone()))?;
        let item = TodoItem {
            id: self.mint_id(),
            body: input.body.clone(),
            status: TodoStatus::Pending,
        };
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }

    async fn update_status(&self, id: TodoId, input: &UpdateStatus) -> Result<TodoItem, ApiError> {
        self.check(Op::UpdateStatus, Call::UpdateStatus(id, input.status))?;
        let mut items = self.items.borrow_mut();
        let item = items.iter_mut().find(|item| item.id == id).ok_or(ApiError::NotFound)?;
        item.status = input.status;
        Ok(item.clone())
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        self.check(Op::Delete, Call::Delete(id))?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
