//! Capability client error types

use shared::SourceErrorKind;
use std::time::Duration;
use thiserror::Error;

/// Result type for capability client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Failure of a single external call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("authentication rejected: {message}")]
    Auth { message: String },

    #[error("timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("malformed response: {message}")]
    Parse { message: String },
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::Network { message: message.into() }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        ClientError::Auth { message: message.into() }
    }

    pub fn timeout(timeout: Duration) -> Self {
        ClientError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ClientError::Parse { message: message.into() }
    }

    /// Failure domain, as reported in resolution outcomes
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            ClientError::Network { .. } => SourceErrorKind::Network,
            ClientError::Auth { .. } => SourceErrorKind::Auth,
            ClientError::Timeout { .. } => SourceErrorKind::Timeout,
            ClientError::Parse { .. } => SourceErrorKind::Parse,
        }
    }
}
