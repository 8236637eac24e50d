//! Error types for the Quicks data layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Quicks data layer.
///
/// This provides typed, structured error variants so a consuming UI shell can
/// match on the failure kind without parsing message strings.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum QuicksError {
    /// The document store rejected or failed a request (network, permission,
    /// unknown collection). Carries the HTTP status when the failure came
    /// from a response rather than the transport.
    #[error("Store request failed: {message}")]
    Store {
        status: Option<u16>,
        message: String,
    },

    /// A fetched document did not fit the typed record schema.
    #[error("Failed to decode {entity} '{id}': {message}")]
    Decode {
        entity: String,
        id: String,
        message: String,
    },

    /// Configuration error (missing or invalid connection settings).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuicksError {
    /// Creates a Store error.
    pub fn store(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Store {
            status,
            message: message.into(),
        }
    }

    /// Creates a Decode error for a single document.
    pub fn decode(
        entity: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Decode {
            entity: entity.into(),
            id: id.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a Store error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }

    /// Check if this is a Decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Check if this is a Config error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// HTTP status attached to a Store error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Store { status, .. } => *status,
            _ => None,
        }
    }
}

/// Conversion from String (for error messages)
impl From<String> for QuicksError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, QuicksError>`.
pub type Result<T> = std::result::Result<T, QuicksError>;
