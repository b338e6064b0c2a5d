//! Use case for posting a new message.

use super::{MessagingError, MessagingResult};
use crate::messaging::{
    domain::{Message, MessageId},
    ports::{DateProvider, MessageRepository},
};
use chrono::SubsecRound;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Request payload for posting a message.
///
/// The publication time is never supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessageRequest {
    id: MessageId,
    author: String,
    text: String,
}

impl PostMessageRequest {
    /// Creates a post request.
    #[must_use]
    pub fn new(id: MessageId, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            text: text.into(),
        }
    }

    /// Returns the requested message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }
}

/// Posts messages stamped with the injected date provider.
///
/// Publication times are truncated to whole microseconds, the finest
/// precision a `TIMESTAMPTZ` column keeps.
#[derive(Clone)]
pub struct PostMessageHandler<R, D>
where
    R: MessageRepository,
    D: DateProvider,
{
    repository: Arc<R>,
    date_provider: Arc<D>,
}

impl<R, D> PostMessageHandler<R, D>
where
    R: MessageRepository,
    D: DateProvider,
{
    /// Creates a new post handler.
    #[must_use]
    pub const fn new(repository: Arc<R>, date_provider: Arc<D>) -> Self {
        Self {
            repository,
            date_provider,
        }
    }

    /// Posts a message.
    ///
    /// The duplicate check runs first, so a reused identifier is reported as
    /// a conflict even when the text is also invalid.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::AlreadyExists`] when the identifier is
    /// taken, [`MessagingError::Validation`] when the text is invalid, and
    /// [`MessagingError::Repository`] when persistence fails.
    #[instrument(skip(self, request), fields(message_id = %request.id(), author = %request.author))]
    pub async fn handle(&self, request: PostMessageRequest) -> MessagingResult<()> {
        let PostMessageRequest { id, author, text } = request;

        if self.repository.exists_by_id(id).await? {
            warn!("message identifier already in use");
            return Err(MessagingError::AlreadyExists(id));
        }

        let published_at = self.date_provider.now().trunc_subsecs(6);
        let message = Message::create(id, author, text, published_at)?;
        self.repository.save(&message).await?;
        debug!(published_at = %message.published_at(), "message posted");
        Ok(())
    }
}
