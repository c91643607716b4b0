//! Non-empty text fields (user/project names, todo titles)

use super::ValidationError;

/// Validated text that was supplied and is not the empty string.
///
/// Whitespace is kept as given: `" valid "` is accepted unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Validate an optional input value for `field`.
    ///
    /// # Example
    /// ```
    /// use trackctl_core::models::NonEmptyText;
    ///
    /// assert!(NonEmptyText::parse("name", Some("Alice".into())).is_ok());
    /// assert!(NonEmptyText::parse("name", Some(String::new())).is_err());
    /// assert!(NonEmptyText::parse("name", None).is_err());
    /// ```
    pub fn parse(field: &'static str, value: Option<String>) -> Result<Self, ValidationError> {
        match value {
            None => Err(ValidationError::Required { field }),
            Some(s) if s.is_empty() => Err(ValidationError::Empty { field }),
            Some(s) => Ok(Self(s)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_surrounding_whitespace() {
        let text = NonEmptyText::parse("title", Some(" valid ".into())).unwrap();
        assert_eq!(text.as_str(), " valid ");
    }

    #[test]
    fn whitespace_only_is_not_empty() {
        assert!(NonEmptyText::parse("title", Some("   ".into())).is_ok());
    }

    #[test]
    fn rejects_missing_and_empty() {
        assert_eq!(
            NonEmptyText::parse("name", None).unwrap_err(),
            ValidationError::Required { field: "name" }
        );
        assert_eq!(
            NonEmptyText::parse("name", Some(String::new())).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
    }
}
