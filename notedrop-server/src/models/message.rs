//! Message text validation

use super::ValidationError;

/// Validated message text
///
/// The only rule is presence; the store's NOT NULL constraint backs the
/// same check. Whitespace-only text is accepted as-is, no trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Create new message text, rejecting the empty string.
    ///
    /// # Example
    /// ```
    /// use notedrop_server::models::MessageText;
    ///
    /// assert!(MessageText::new("hello").is_ok());
    /// assert!(MessageText::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Required { field: "Message" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        let err = MessageText::new("").unwrap_err();
        assert_eq!(err.to_string(), "Message is required");
    }

    #[test]
    fn keeps_text_unchanged() {
        let text = MessageText::new("  padded  ").unwrap();
        assert_eq!(text.as_str(), "  padded  ");
    }

    #[test]
    fn whitespace_only_is_accepted() {
        assert!(MessageText::new("   ").is_ok());
    }
}
