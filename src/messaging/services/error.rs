//! Service-level errors shared by messaging use cases.

use crate::messaging::{
    domain::{MessageDomainError, MessageId},
    ports::{MessageRepositoryError, UserRepositoryError},
};
use thiserror::Error;

/// Errors raised by messaging use cases.
///
/// Use cases never translate domain errors; the driving side maps these
/// variants to its own responses.
#[derive(Debug, Error)]
pub enum MessagingError {
    /// Message text failed domain validation.
    #[error(transparent)]
    Validation(#[from] MessageDomainError),

    /// A message with the requested identifier already exists.
    #[error("Message already exists")]
    AlreadyExists(MessageId),

    /// The message to edit does not exist.
    #[error("Message not found")]
    NotFound(MessageId),

    /// The user does not exist.
    #[error("User {0} not found")]
    UserNotFound(String),

    /// Message repository operation failed.
    #[error(transparent)]
    Repository(#[from] MessageRepositoryError),

    /// User repository operation failed.
    #[error(transparent)]
    UserRepository(#[from] UserRepositoryError),
}

/// Result type for messaging use cases.
pub type MessagingResult<T> = Result<T, MessagingError>;
