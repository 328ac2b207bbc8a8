//! Client Errors
//!
//! Every failure a view model can hand to the presentation layer.

use thiserror::Error;

use crate::forms::FieldErrors;

/// Shown when the server fails without an `error` message of its own.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Common result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Why a request never produced a parseable response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkFailure {
    #[error("the server did not answer in time")]
    Timeout,
    #[error("the server could not be reached: {0}")]
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Local, field-level. Never reaches the network.
    #[error("{} required field(s) are empty", .0.len())]
    Validation(FieldErrors),
    /// Credentials or token rejected.
    #[error("{0}")]
    Unauthorized(String),
    /// Generic `{error}` payload, surfaced verbatim.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error(transparent)]
    Network(#[from] NetworkFailure),
    /// The durable token slot refused a write.
    #[error("could not persist session: {0}")]
    Storage(String),
    /// The same mutation is already in flight.
    #[error("already in progress")]
    Busy,
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }

    /// Build the error for a failed response from its HTTP status and optional message.
    pub fn from_response(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        match status {
            401 | 403 => ClientError::Unauthorized(message),
            _ => ClientError::Server { status, message },
        }
    }
}
