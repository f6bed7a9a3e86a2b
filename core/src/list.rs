//! List view-state controller.
//!
//! # Design
//! `ListController` owns the authoritative list (the last snapshot the service
//! confirmed) and the active `StatusFilter`. The visible list is derived on
//! every read and never stored.
//!
//! Every remote operation is split into a synchronous `begin_*` step that
//! validates and marks the action in flight, and a `finish_*` / `apply_fetch`
//! step that consumes the outcome. This lets several calls be outstanding on
//! one thread of control without sharing the controller across tasks. The
//! async methods (`load`, `toggle_status`, `delete_item`) chain the two steps
//! for the sequential case.
//!
//! Mutations are never applied locally. A successful toggle or delete is
//! followed by a full refetch, and whichever fetch resolves last wins.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use crate::error::{ApiError, TodoError};
use crate::filter::{derive_visible, StatusCounts};
use crate::service::TodoService;
use crate::types::{StatusFilter, TodoId, TodoItem, TodoQuery, TodoStatus, UpdateStatus};

/// A mutation awaiting the service. At most one of each per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PendingAction {
    Create,
    Toggle(TodoId),
    Delete(TodoId),
}

impl fmt::Display for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingAction::Create => write!(f, "creating a todo"),
            PendingAction::Toggle(id) => write!(f, "toggling {id}"),
            PendingAction::Delete(id) => write!(f, "deleting {id}"),
        }
    }
}

/// Status update produced by `begin_toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: TodoId,
    pub status: TodoStatus,
}

impl StatusChange {
    pub fn request(&self) -> UpdateStatus {
        UpdateStatus { status: self.status }
    }
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct ListController {
    items: Vec<TodoItem>,
    filter: StatusFilter,
    in_flight: HashSet<PendingAction>,
    issued: u64,
    applied: Option<FetchTicket>,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The authoritative list, in service order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn visible(&self) -> Vec<&TodoItem> {
        derive_visible(&self.items, self.filter)
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::of(&self.items)
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the control for `action` should be disabled.
    pub fn is_in_flight(&self, action: PendingAction) -> bool {
        self.in_flight.contains(&action)
    }

    /// The fetch whose result is currently displayed, if any succeeded yet.
    pub fn last_applied(&self) -> Option<FetchTicket> {
        self.applied
    }

    /// Purely local; no network call.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.filter != filter {
            debug!(from = %self.filter, to = %filter, "status filter changed");
        }
        self.filter = filter;
    }

    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    pub fn begin_load(&mut self) -> (FetchTicket, TodoQuery) {
        self.issued += 1;
        (FetchTicket(self.issued), TodoQuery::everything())
    }

    /// Replace the authoritative list on success; keep it untouched on failure.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: Result<Vec<TodoItem>, ApiError>) -> Result<(), TodoError> {
        match outcome {
            Ok(items) => {
                if self.applied.is_some_and(|applied| applied > ticket) {
                    debug!(?ticket, "older fetch resolved last; taking it as authoritative");
                }
                debug!(?ticket, count = items.len(), "authoritative list replaced");
                self.items = items;
                self.applied = Some(ticket);
                Ok(())
            }
            Err(e) => {
                warn!(?ticket, error = %e, "fetch failed; keeping previous list");
                Err(TodoError::Remote(e))
            }
        }
    }

    pub async fn load<S: TodoService>(&mut self, service: &S) -> Result<(), TodoError> {
        let (ticket, query) = self.begin_load();
        let outcome = service.fetch_all(&query).await;
        self.apply_fetch(ticket, outcome)
    }

    // -----------------------------------------------------------------------
    // Toggle
    // -----------------------------------------------------------------------

    /// Look up `id` and mark a toggle in flight. The returned change carries
    /// the opposite of the item's current status.
    pub fn begin_toggle(&mut self, id: TodoId) -> Result<StatusChange, TodoError> {
        let status = self.get(id).map(|item| item.status.toggled()).ok_or(TodoError::NotFound(id))?;
        self.mark(PendingAction::Toggle(id))?;
        debug!(%id, %status, "toggle issued");
        Ok(StatusChange { id, status })
    }

    /// On `Ok` the caller must `load()`; the displayed status only changes then.
    pub fn finish_toggle(&mut self, change: StatusChange, outcome: Result<(), ApiError>) -> Result<(), TodoError> {
        self.settle(PendingAction::Toggle(change.id), outcome)
    }

    pub async fn toggle_status<S: TodoService>(&mut self, service: &S, id: TodoId) -> Result<(), TodoError> {
        let change = self.begin_toggle(id)?;
        let outcome = service.update_status(change.id, &change.request()).await.map(|_| ());
        self.finish_toggle(change, outcome)?;
        self.load(service).await
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    /// Mark a delete of `id` in flight. The id is sent as-is; an unknown id is
    /// the service's to reject.
    pub fn begin_delete(&mut self, id: TodoId) -> Result<TodoId, TodoError> {
        self.mark(PendingAction::Delete(id))?;
        debug!(%id, "delete issued");
        Ok(id)
    }

    pub fn finish_delete(&mut self, id: TodoId, outcome: Result<(), ApiError>) -> Result<(), TodoError> {
        self.settle(PendingAction::Delete(id), outcome)
    }

    pub async fn delete_item<S: TodoService>(&mut self, service: &S, id: TodoId) -> Result<(), TodoError> {
        let id = self.begin_delete(id)?;
        let outcome = service.delete(id).await;
        self.finish_delete(id, outcome)?;
        self.load(service).await
    }

    fn mark(&mut self, action: PendingAction) -> Result<(), TodoError> {
        if !self.in_flight.insert(action) {
            return Err(TodoError::InFlight(action));
        }
        Ok(())
    }

    fn settle(&mut self, action: PendingAction, outcome: Result<(), ApiError>) -> Result<(), TodoError> {
        self.in_flight.remove(&action);
        outcome.map_err(|e| {
            warn!(%action, error = %e, "mutation failed");
            TodoError::Remote(e)
        })
    }
}
