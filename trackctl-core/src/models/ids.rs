//! Per-entity identifier newtypes
//!
//! Ids are positive, assigned from 1 and never reused. Zero is reserved to
//! mean "not supplied" on input (see [`require_id`]).

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`User`](super::User)
    UserId
);
entity_id!(
    /// Identifier of a [`Project`](super::Project)
    ProjectId
);
entity_id!(
    /// Identifier of a [`Todo`](super::Todo)
    TodoId
);

/// Check that an input id was supplied.
///
/// Absent and zero are both "missing": zero is never assigned, and proto3
/// decodes an unset `uint64` as zero.
pub fn require_id<I>(field: &'static str, id: Option<I>) -> Result<I, ValidationError>
where
    I: Copy + Into<u64>,
{
    match id {
        Some(id) if id.into() != 0 => Ok(id),
        _ => Err(ValidationError::Required { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&UserId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: ProjectId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn parses_from_path_segment() {
        assert_eq!("12".parse::<TodoId>().unwrap(), TodoId::new(12));
        assert!("abc".parse::<TodoId>().is_err());
        assert!("-1".parse::<TodoId>().is_err());
    }

    #[test]
    fn zero_and_absent_are_missing() {
        assert!(require_id::<UserId>("userId", None).is_err());
        assert!(require_id("userId", Some(UserId::new(0))).is_err());
        assert_eq!(
            require_id("userId", Some(UserId::new(3))).unwrap(),
            UserId::new(3)
        );
    }
}
