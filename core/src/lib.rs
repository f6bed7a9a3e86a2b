//! View-state core for a todo list backed by a remote todo service.
//!
//! # Overview
//! Two controllers hold all client-side state: `CreationController` (the
//! "add todo" draft) and `ListController` (the authoritative list, the status
//! filter and the derived visible list). Both talk to the outside world only
//! through the `TodoService` trait.
//!
//! # Design
//! - Mutations are never applied locally; every successful create, toggle or
//!   delete is followed by a full refetch.
//! - `TodoClient` is stateless: it builds `HttpRequest` values and parses
//!   `HttpResponse` values, and a host-supplied `Transport` does the I/O.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod creation;
pub mod error;
pub mod filter;
pub mod http;
pub mod list;
pub mod service;
pub mod types;

#[cfg(test)]
mod fake;

pub use client::TodoClient;
pub use creation::{CreationController, Key};
pub use error::{ApiError, TodoError, ValidationError};
pub use filter::{derive_visible, StatusCounts};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use list::{FetchTicket, ListController, PendingAction, StatusChange};
pub use service::{RemoteTodoService, TodoService};
pub use types::{CreateTodo, StatusFilter, TodoId, TodoItem, TodoQuery, TodoStatus, UpdateStatus};
