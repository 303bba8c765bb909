/*
[INPUT]:  Error sources (signing, transport, status, serialization, config)
[OUTPUT]: Structured error types carrying operation and status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the IHL adapter
#[derive(Error, Debug)]
pub enum IhlError {
    /// Network-level failure (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response status outside the endpoint's allow-list
    #[error("{operation} failure status {status}")]
    Status { operation: String, status: u16 },

    /// Wallet could not produce a credential
    #[error("Signing failed: {message}")]
    Signing { message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extension point that has no implementation yet
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl IhlError {
    /// Create a status error for an operation label such as `IHL GET /account/bank-account`
    pub fn status(operation: impl Into<String>, status: StatusCode) -> Self {
        IhlError::Status {
            operation: operation.into(),
            status: status.as_u16(),
        }
    }

    /// Create a signing error
    pub fn signing(message: impl Into<String>) -> Self {
        IhlError::Signing {
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IhlError::Status { status, .. } => Some(*status),
            IhlError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if error indicates the credential was missing or rejected
    pub fn is_auth_error(&self) -> bool {
        matches!(self, IhlError::Signing { .. })
            || matches!(self.status_code(), Some(401) | Some(403))
    }
}

/// Result type alias for IHL operations
pub type Result<T> = std::result::Result<T, IhlError>;
