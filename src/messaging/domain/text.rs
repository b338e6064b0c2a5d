//! Validated message text.

use super::MessageDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Text body of a message.
///
/// # Invariants
///
/// - contains at least one non-whitespace character
/// - holds at most [`MessageText::MAX_CHARS`] characters (Unicode scalar
///   values, not bytes)
///
/// The text is stored exactly as supplied; surrounding whitespace is kept.
///
/// # Examples
///
/// ```
/// use crieur::messaging::domain::{MessageDomainError, MessageText};
///
/// let text = MessageText::new("Hello world!").expect("valid text");
/// assert_eq!(text.as_str(), "Hello world!");
///
/// assert_eq!(MessageText::new("   "), Err(MessageDomainError::BlankText));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageText(String);

impl MessageText {
    /// Maximum number of characters accepted in a message.
    pub const MAX_CHARS: usize = 280;

    /// Creates validated message text.
    ///
    /// The blank check runs before the length check.
    ///
    /// # Errors
    ///
    /// Returns [`MessageDomainError::BlankText`] when the value is empty or
    /// whitespace-only, and [`MessageDomainError::TextTooLong`] when it holds
    /// more than [`MessageText::MAX_CHARS`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, MessageDomainError> {
        let raw = value.into();
        if raw.chars().all(char::is_whitespace) {
            return Err(MessageDomainError::BlankText);
        }

        let length = raw.chars().count();
        if length > Self::MAX_CHARS {
            return Err(MessageDomainError::TextTooLong {
                length,
                max: Self::MAX_CHARS,
            });
        }

        Ok(Self(raw))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = MessageDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MessageText> for String {
    fn from(text: MessageText) -> Self {
        text.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
