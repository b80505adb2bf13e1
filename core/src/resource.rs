//! Three-state result for screens that render loading, data or an error.

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    /// The request has been issued and no answer is in yet.
    Pending,
    Ok(T),
    /// The operation failed; the string is ready to show to the user.
    Failed(String),
}

impl<T> Resource<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Resource::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Resource::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Resource::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Resource::Pending => Resource::Pending,
            Resource::Ok(value) => Resource::Ok(f(value)),
            Resource::Failed(message) => Resource::Failed(message),
        }
    }
}

impl<T> From<Result<T, ApiError>> for Resource<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Resource::Ok(value),
            Err(err) => Resource::Failed(err.to_string()),
        }
    }
}
