/// Structured error types for trackctl-core.
///
/// Every adapter maps these onto its own failure representation
/// (HTTP status, GraphQL error, gRPC status). None of them is fatal:
/// a failed operation leaves the tracker untouched.
use std::fmt;

use thiserror::Error;

use crate::models::ValidationError;

/// Kind of entity a lookup was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Project,
    Todo,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Project => "Project",
            Self::Todo => "Todo",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for tracker operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Required input missing or empty
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced entity does not exist
    #[error("{resource} not found")]
    NotFound { resource: Resource, id: u64 },
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    /// Create a not-found error for the given resource and raw id
    pub fn not_found(resource: Resource, id: impl Into<u64>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_resource() {
        let err = TrackerError::not_found(Resource::User, 7u64);
        assert_eq!(err.to_string(), "User not found");

        let err = TrackerError::not_found(Resource::Project, 2u64);
        assert_eq!(err.to_string(), "Project not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_error_is_transparent() {
        let err: TrackerError = ValidationError::Required { field: "name" }.into();
        assert_eq!(err.to_string(), "name is required");
        assert!(err.is_validation());
    }
}
