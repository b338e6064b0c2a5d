//! Repository port for message persistence and lookup.

use crate::messaging::domain::{Message, MessageDomainError, MessageId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message repository operations.
pub type MessageRepositoryResult<T> = Result<T, MessageRepositoryError>;

/// Message persistence contract.
///
/// Repositories are pure storage: they never validate message content, which
/// is the domain's job before a message reaches them. Every returned message
/// is an owned copy, so mutating it never changes stored state.
///
/// # Implementation Notes
///
/// - `save` is an upsert keyed by message identifier and is last-write-wins;
///   no staleness check is performed
/// - implementations must be safe for concurrent callers
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts or replaces the message with the same identifier and returns
    /// the stored copy.
    ///
    /// # Errors
    ///
    /// Returns [`MessageRepositoryError::Persistence`] when the backing store
    /// fails.
    async fn save(&self, message: &Message) -> MessageRepositoryResult<Message>;

    /// Returns every message whose author equals `author` exactly.
    ///
    /// The comparison is case-sensitive and the order is unspecified.
    async fn find_all_by_author(&self, author: &str) -> MessageRepositoryResult<Vec<Message>>;

    /// Finds a message by identifier.
    ///
    /// Returns `None` when the message does not exist.
    async fn find_by_id(&self, id: MessageId) -> MessageRepositoryResult<Option<Message>>;

    /// Returns `true` when a message with the identifier is stored.
    async fn exists_by_id(&self, id: MessageId) -> MessageRepositoryResult<bool>;
}

/// Errors returned by message repository implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    /// A stored record no longer satisfies the domain rules.
    #[error("stored message {id} is invalid: {source}")]
    CorruptRecord {
        /// Identifier of the rejected record.
        id: MessageId,
        /// Domain validation failure raised while loading.
        source: MessageDomainError,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
