//! Bearer credentials.
//!
//! Operations take the token explicitly; there is no process-wide session.
//! A blank token is rejected while the request is being built, so an
//! unauthenticated caller never reaches the transport.

use std::fmt;

use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// A token with no usable content, e.g. a logged-out user.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `authorization` header pair, or `Unauthorized` for a blank token.
    pub fn authorization_header(&self) -> Result<(String, String), ApiError> {
        if self.is_blank() {
            return Err(ApiError::Unauthorized);
        }
        Ok((
            "authorization".to_string(),
            format!("{BEARER_PREFIX}{}", self.0.trim()),
        ))
    }
}

// Keep tokens out of logs and panic messages.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            f.write_str("AuthToken(<empty>)")
        } else {
            f.write_str("AuthToken(<redacted>)")
        }
    }
}

impl From<&str> for AuthToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AuthToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_bearer_scheme() {
        let (name, value) = AuthToken::new("abc123").authorization_header().unwrap();
        assert_eq!(name, "authorization");
        assert_eq!(value, "Bearer abc123");
    }

    #[test]
    fn blank_token_is_unauthorized() {
        for token in [AuthToken::empty(), AuthToken::new("   ")] {
            assert_eq!(token.authorization_header().unwrap_err(), ApiError::Unauthorized);
        }
    }

    #[test]
    fn debug_does_not_leak_token() {
        let rendered = format!("{:?}", AuthToken::new("secret-value"));
        assert!(!rendered.contains("secret-value"));
    }
}
