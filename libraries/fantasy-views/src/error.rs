//! Error types for the view models.

use crate::form::FieldError;
use fantasy_client::ClientError;
use thiserror::Error;

/// Why a view action did not complete.
#[derive(Error, Debug)]
pub enum ViewError {
    /// Client-side validation failed; nothing was sent
    #[error("Invalid form: {}", join_fields(.0))]
    InvalidForm(Vec<FieldError>),

    /// A related request is still loading; nothing was sent
    #[error("A request is already in progress")]
    Busy,

    /// The user declined the confirmation prompt
    #[error("Cancelled")]
    Cancelled,

    /// Refused by a client-side rule (full roster, no matchweek, ...)
    #[error("{0}")]
    Rejected(String),

    /// The server call failed; `message` is what the banner shows
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: ClientError,
    },
}

impl ViewError {
    pub(crate) fn request(message: impl Into<String>, source: ClientError) -> Self {
        ViewError::Request {
            message: message.into(),
            source,
        }
    }

    /// Underlying client error, if a request was made.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            ViewError::Request { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for view actions.
pub type Result<T> = std::result::Result<T, ViewError>;
