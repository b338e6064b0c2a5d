//! Error types for messaging domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating messaging domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessageDomainError {
    /// The message text is empty or whitespace-only.
    #[error("Message text must not be blank")]
    BlankText,

    /// The message text exceeds the character limit.
    #[error("Message text must be less than {max} characters")]
    TextTooLong {
        /// Length of the rejected text, in characters.
        length: usize,
        /// Maximum accepted length, in characters.
        max: usize,
    },
}
