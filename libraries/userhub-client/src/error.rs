//! Error types for the UserHub client.

use thiserror::Error;
use tonic::Code;

/// Errors that can occur when calling a UserHub server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Endpoint URL rejected before any connection attempt
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Connection could not be established
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// No user with the given id exists on the server
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    Unavailable(String),

    /// Any other status returned by the server, passed through unchanged
    #[error("Server error ({code:?}): {message}")]
    Status { code: Code, message: String },
}

impl ClientError {
    /// Stable, machine-readable kind of this error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => "invalid_endpoint",
            Self::Transport(_) => "transport",
            Self::NotFound(_) => "not_found",
            Self::Unavailable(_) => "unavailable",
            Self::Status { .. } => "rpc_error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<tonic::Status> for ClientError {
    fn from(status: tonic::Status) -> Self {
        let message = status.message().to_string();
        match status.code() {
            Code::NotFound => Self::NotFound(message),
            Code::Unavailable => Self::Unavailable(message),
            code => Self::Status { code, message },
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
