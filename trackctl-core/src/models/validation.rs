//! Validation error types

use std::fmt;

/// Validation error for tracker inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field was not supplied (ids: absent or zero)
    Required { field: &'static str },

    /// Text field supplied as the empty string
    Empty { field: &'static str },
}

impl ValidationError {
    /// Name of the offending field as it appears on the wire
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field } | Self::Empty { field } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}
