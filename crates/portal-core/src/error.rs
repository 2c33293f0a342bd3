//! Error types for the portal client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback text used when the server rejects a request without a message.
pub const SERVER_ERROR_FALLBACK: &str = "Server error";

/// Banner text shown for transport and parse failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: the server could not be reached";

/// A shared error type for the entire portal client.
///
/// The first four variants form the user-facing taxonomy: every failed user
/// action ends in exactly one of them. The rest are plumbing errors raised
/// by storage and configuration code.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PortalError {
    /// HTTP 401 from any endpoint. Handled as a silent logout.
    #[error("Authentication expired")]
    AuthExpired,

    /// Any other non-success HTTP status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Transport failure or an unreadable response body.
    #[error("Network error: {0}")]
    Network(String),

    /// A required form field is missing. Detected before any request is sent.
    #[error("{0}")]
    Validation(String),

    /// Local storage error (file system operations)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Server error, falling back to a generic message when the
    /// server did not supply one.
    pub fn server(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
        Self::Server { status, message }
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an AuthExpired error
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns the text shown in the error banner, or `None` when the error
    /// must not surface as a banner at all (expired authentication).
    pub fn banner_message(&self) -> Option<String> {
        match self {
            Self::AuthExpired => None,
            Self::Server { message, .. } => Some(message.clone()),
            Self::Network(_) => Some(NETWORK_ERROR_MESSAGE.to_string()),
            Self::Validation(message) => Some(message.clone()),
            other => Some(other.to_string()),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PortalError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;
