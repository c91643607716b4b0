//! Tracker errors as GraphQL errors
//!
//! The message is the tracker's own text; `extensions.code` tells clients
//! which kind of failure it was.

use std::str::FromStr;

use async_graphql::{Error, ErrorExtensions, ID};
use trackctl_core::TrackerError;

pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const NOT_FOUND: &str = "NOT_FOUND";

fn with_code(message: impl Into<String>, code: &'static str) -> Error {
    Error::new(message).extend_with(|_, ext| ext.set("code", code))
}

/// Convert a tracker failure for the response `errors` list.
pub fn tracker_error(err: TrackerError) -> Error {
    let code = if err.is_validation() {
        BAD_USER_INPUT
    } else {
        NOT_FOUND
    };
    with_code(err.to_string(), code)
}

/// Parse a GraphQL `ID` into a typed tracker id.
pub fn parse_id<I: FromStr>(field: &str, id: &ID) -> Result<I, Error> {
    id.0.parse::<I>()
        .map_err(|_| with_code(format!("{} must be a positive integer", field), BAD_USER_INPUT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackctl_core::{Resource, UserId};

    #[test]
    fn not_found_keeps_tracker_message() {
        let err = tracker_error(TrackerError::not_found(Resource::Project, 4u64));
        assert_eq!(err.message, "Project not found");
    }

    #[test]
    fn parses_numeric_ids_only() {
        assert_eq!(
            parse_id::<UserId>("id", &ID::from("5")).unwrap(),
            UserId::new(5)
        );
        assert!(parse_id::<UserId>("id", &ID::from("five")).is_err());
    }
}
