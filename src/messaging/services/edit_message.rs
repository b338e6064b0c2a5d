//! Use case for replacing the text of an existing message.

use super::{MessagingError, MessagingResult};
use crate::messaging::{domain::MessageId, ports::MessageRepository};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Request payload for editing a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMessageRequest {
    id: MessageId,
    text: String,
}

impl EditMessageRequest {
    /// Creates an edit request.
    #[must_use]
    pub fn new(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    /// Returns the identifier of the message to edit.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }
}

/// Edits message text. Author and publication time are left untouched.
#[derive(Clone)]
pub struct EditMessageHandler<R>
where
    R: MessageRepository,
{
    repository: Arc<R>,
}

impl<R> EditMessageHandler<R>
where
    R: MessageRepository,
{
    /// Creates a new edit handler.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Replaces the text of an existing message.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingError::NotFound`] when the message does not exist,
    /// [`MessagingError::Validation`] when the new text is invalid, and
    /// [`MessagingError::Repository`] when persistence fails.
    #[instrument(skip(self, request), fields(message_id = %request.id()))]
    pub async fn handle(&self, request: EditMessageRequest) -> MessagingResult<()> {
        let EditMessageRequest { id, text } = request;

        let Some(mut message) = self.repository.find_by_id(id).await? else {
            warn!("message to edit does not exist");
            return Err(MessagingError::NotFound(id));
        };

        message.edit_text(text)?;
        self.repository.save(&message).await?;
        debug!("message edited");
        Ok(())
    }
}
