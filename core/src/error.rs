//! Error types for the blog API client.
//!
//! # Design
//! Every variant renders (via `Display`) as the message a user should see,
//! so callers can surface `err.to_string()` directly. Three classes matter:
//! a missing credential is caught before any request is built, transport
//! failures arrive as `Network`, and non-2xx responses are run through the
//! classifier and land in `Http`.

use thiserror::Error;

use crate::messages;

/// Errors returned by `BlogClient` and `BlogRepository` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable bearer token. Never reaches the network.
    #[error("{}", messages::UNAUTHORIZED)]
    Unauthorized,

    /// The transport could not complete the round-trip.
    #[error("{prefix}: {0}", prefix = messages::NETWORK)]
    Network(String),

    /// The server answered with a non-2xx status. `message` is the
    /// classified, user-facing text.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The server answered 2xx but flagged the envelope `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Input rejected locally before a request was built.
    #[error("{0}")]
    InvalidInput(String),

    /// The response body did not match the expected shape.
    #[error("{prefix}: {0}", prefix = messages::UNKNOWN)]
    Deserialization(String),

    /// The request payload could not be encoded.
    #[error("{prefix}: {0}", prefix = messages::UNKNOWN)]
    Serialization(String),
}

impl ApiError {
    /// HTTP status behind this error, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Http { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_carries_prefix_and_cause() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Kesalahan jaringan: connection refused");
    }

    #[test]
    fn http_error_displays_classified_message() {
        let err = ApiError::Http {
            status: 404,
            message: messages::NOT_FOUND.to_string(),
        };
        assert_eq!(err.to_string(), messages::NOT_FOUND);
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn unauthorized_covers_local_and_remote() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(ApiError::Http {
            status: 401,
            message: String::new()
        }
        .is_unauthorized());
        assert!(!ApiError::Rejected("nope".to_string()).is_unauthorized());
    }
}
