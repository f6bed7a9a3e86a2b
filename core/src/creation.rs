//! Creation controller: the "add todo" input and its submit rules.
//!
//! The draft is cleared as soon as a create request is handed out, before
//! the service answers. A rejected (empty) submission sends nothing and keeps
//! the draft.
//!
//! Enter and the submit button share one emptiness check: Enter submits a
//! non-empty draft and warns on an empty one.

use tracing::{debug, warn};

use crate::error::{ApiError, TodoError, ValidationError};
use crate::list::{ListController, PendingAction};
use crate::service::TodoService;
use crate::types::{CreateTodo, TodoItem};

/// Keyboard input delivered to the draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
}

#[derive(Debug, Default)]
pub struct CreationController {
    draft: String,
    submitting: bool,
}

impl CreationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// True while a create request is awaiting the service.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Validate the draft and hand out the create request.
    ///
    /// The draft is compared to `""` exactly; whitespace counts as content.
    pub fn submit(&mut self) -> Result<CreateTodo, TodoError> {
        if self.submitting {
            return Err(TodoError::InFlight(PendingAction::Create));
        }
        if self.draft.is_empty() {
            return Err(ValidationError::EmptyBody.into());
        }
        self.submitting = true;
        let body = std::mem::take(&mut self.draft);
        debug!(len = body.len(), "create issued");
        Ok(CreateTodo { body })
    }

    /// Edit the draft; `Enter` submits through the same check as `submit`.
    pub fn handle_key(&mut self, key: Key) -> Option<Result<CreateTodo, TodoError>> {
        match key {
            Key::Char(c) => {
                self.draft.push(c);
                None
            }
            Key::Backspace => {
                self.draft.pop();
                None
            }
            Key::Enter => Some(self.submit()),
        }
    }

    /// Complete the in-flight create. On `Ok` the caller must reload the list.
    pub fn finish(&mut self, outcome: Result<TodoItem, ApiError>) -> Result<TodoItem, TodoError> {
        self.submitting = false;
        outcome.map_err(|e| {
            warn!(error = %e, "create failed");
            TodoError::Remote(e)
        })
    }

    /// Submit, wait for the service, then resynchronize `list`.
    pub async fn submit_to<S: TodoService>(
        &mut self,
        service: &S,
        list: &mut ListController,
    ) -> Result<TodoItem, TodoError> {
        let request = self.submit()?;
        self.send(service, list, request).await
    }

    /// Like `submit_to`, driven by a key press. Returns `None` for keys that
    /// only edit the draft.
    pub async fn key_to<S: TodoService>(
        &mut self,
        key: Key,
        service: &S,
        list: &mut ListController,
    ) -> Option<Result<TodoItem, TodoError>> {
        let request = match self.handle_key(key)? {
            Ok(request) => request,
            Err(e) => return Some(Err(e)),
        };
        Some(self.send(service, list, request).await)
    }

    async fn send<S: TodoService>(
        &mut self,
        service: &S,
        list: &mut ListController,
        request: CreateTodo,
    ) -> Result<TodoItem, TodoError> {
        let outcome = service.create(&request).await;
        let item = self.finish(outcome)?;
        list.load(service).await?;
        Ok(item)
    }
}
