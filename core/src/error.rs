//! Error types for the todo client and its controllers.
//!
//! # Design
//! `ApiError` describes what went wrong at the service boundary. `NotFound`
//! gets a dedicated variant because callers frequently distinguish "the
//! resource does not exist" from "the server returned an unexpected status."
//!
//! `TodoError` is what the controllers hand to the presentation layer. Every
//! variant is recoverable: the controller is back in its idle state by the
//! time the error is returned.

use thiserror::Error;

use crate::list::PendingAction;
use crate::types::TodoId;

/// Errors produced while talking to the remote todo service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, timeout).
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Input rejected before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty body")]
    EmptyBody,
}

/// Errors surfaced by the creation and list controllers.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The id is not in the authoritative list.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// The remote call did not take effect.
    #[error("remote call failed: {0}")]
    Remote(#[from] ApiError),

    /// The same action on the same item is still awaiting the service.
    #[error("{0} is already in progress")]
    InFlight(PendingAction),
}

impl TodoError {
    /// Message suitable for a blocking notice in the UI.
    pub fn notice(&self) -> String {
        match self {
            TodoError::Validation(ValidationError::EmptyBody) => "please type something".to_string(),
            other => other.to_string(),
        }
    }
}
